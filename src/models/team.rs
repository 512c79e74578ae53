//! Team model and its render-time symbolic keys.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Symbolic icon key for a team.
///
/// Stored as a lowercase string; anything outside the known set falls back
/// to [`FlagKey::Unknown`], both when parsing store rows and when
/// deserializing JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKey {
    Bolt,
    Triangle,
    Alt,
    Fire,
    #[default]
    #[serde(other)]
    Unknown,
}

impl FlagKey {
    /// Parse a stored key, falling back to `Unknown`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "bolt" => FlagKey::Bolt,
            "triangle" => FlagKey::Triangle,
            "alt" => FlagKey::Alt,
            "fire" => FlagKey::Fire,
            _ => FlagKey::Unknown,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            FlagKey::Bolt => "Bolt",
            FlagKey::Triangle => "Triangle",
            FlagKey::Alt => "Globe",
            FlagKey::Fire => "Fire",
            FlagKey::Unknown => "Member",
        }
    }
}

/// Symbolic color key for a team.
///
/// Same fallback behavior as [`FlagKey`]: unknown keys render as the
/// neutral `inherit` color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Blue,
    Orange,
    Silver,
    Green,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TeamColor {
    /// Parse a stored key, falling back to `Unknown`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "blue" => TeamColor::Blue,
            "orange" => TeamColor::Orange,
            "silver" => TeamColor::Silver,
            "green" => TeamColor::Green,
            _ => TeamColor::Unknown,
        }
    }

    /// Concrete CSS color used by the roster view.
    pub fn css(&self) -> &'static str {
        match self {
            TeamColor::Blue => "LightSkyBlue",
            TeamColor::Orange => "coral",
            TeamColor::Silver => "Silver",
            TeamColor::Green => "MediumSeaGreen",
            TeamColor::Unknown => "inherit",
        }
    }
}

/// A club team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: TeamId,

    /// Team name
    pub name: String,

    /// Symbolic icon key
    pub flag: FlagKey,

    /// Symbolic color key
    pub color: TeamColor,
}
