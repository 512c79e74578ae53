//! Club member model.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A registered club member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login handle
    pub username: String,

    /// Contact address
    pub email: String,
}
