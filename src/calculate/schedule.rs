//! Schedule presentation: chronological game rows with display attributes.

use serde::Serialize;

use crate::models::{Game, GameId, Team, TeamId};

/// Column highlight for a presented game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// Higher score in a complete game
    Win,
    /// Equal scores in a complete game
    Tie,
    /// Pending game, or the losing side
    #[default]
    Neutral,
}

/// Which field a game is played on.
///
/// Derived from the parity of the game id; there is no venue column in the
/// store. Even ids play the back field, odd ids the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Front,
    Back,
}

impl Venue {
    fn for_game(id: GameId) -> Self {
        if id % 2 == 0 {
            Venue::Back
        } else {
            Venue::Front
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Venue::Front => "Front",
            Venue::Back => "Back",
        }
    }
}

/// One row of the schedule view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRow {
    pub id: GameId,
    pub date: chrono::NaiveDate,
    /// Date rendered M/D/YYYY
    pub date_text: String,
    pub venue: Venue,
    /// Home team name, empty when the team cannot be resolved
    pub home_team: String,
    /// Away team name, empty when the team cannot be resolved
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    /// Score cell text, "TBD" until the score is entered
    pub home_score_text: String,
    pub away_score_text: String,
    pub home_highlight: Highlight,
    pub away_highlight: Highlight,
}

/// Build display rows for the schedule view.
///
/// Games are sorted ascending by date; games on the same day keep their
/// input order. Highlights are only derived from complete games: the higher
/// score wins, equal scores tie, anything pending stays neutral.
pub fn present(games: &[Game], teams: &[Team]) -> Vec<GameRow> {
    let mut ordered: Vec<&Game> = games.iter().collect();
    ordered.sort_by_key(|g| g.date);

    ordered.into_iter().map(|g| row(g, teams)).collect()
}

fn team_name(teams: &[Team], id: TeamId) -> String {
    teams
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.clone())
        .unwrap_or_default()
}

fn score_text(score: Option<i32>) -> String {
    match score {
        Some(n) => n.to_string(),
        None => "TBD".to_string(),
    }
}

fn row(game: &Game, teams: &[Team]) -> GameRow {
    let (home_highlight, away_highlight) = match (game.home_score, game.away_score) {
        (Some(home), Some(away)) if home > away => (Highlight::Win, Highlight::Neutral),
        (Some(home), Some(away)) if away > home => (Highlight::Neutral, Highlight::Win),
        (Some(_), Some(_)) => (Highlight::Tie, Highlight::Tie),
        _ => (Highlight::Neutral, Highlight::Neutral),
    };

    GameRow {
        id: game.id,
        date: game.date,
        date_text: game.date.format("%-m/%-d/%Y").to_string(),
        venue: Venue::for_game(game.id),
        home_team: team_name(teams, game.home_team_id),
        away_team: team_name(teams, game.away_team_id),
        home_score: game.home_score,
        away_score: game.away_score,
        home_score_text: score_text(game.home_score),
        away_score_text: score_text(game.away_score),
        home_highlight,
        away_highlight,
    }
}
