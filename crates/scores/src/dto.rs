use arcade_core::ApiError;
use arcade_core::GAME_NAME_MAX;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize)]
pub struct Submission {
    pub game_name: String,
    pub score: i32,
}

impl Submission {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.game_name.trim().is_empty() {
            return Err(ApiError::BadRequest("game_name must not be empty".to_string()));
        }
        if self.game_name.chars().count() > GAME_NAME_MAX {
            return Err(ApiError::BadRequest(format!(
                "game_name must be at most {} characters",
                GAME_NAME_MAX
            )));
        }
        Ok(())
    }
}

/// Outcome of a submission. `improved` is false when the stored best
/// was greater or equal.
#[derive(Debug, Serialize, Deserialize)]
pub struct Receipt {
    pub status: String,
    pub improved: bool,
}

impl Receipt {
    pub fn processed(improved: bool) -> Self {
        Self {
            status: "processed".to_string(),
            improved,
        }
    }
}

/// Leaderboard query string.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Board {
    pub game: Option<String>,
}

impl Board {
    /// The game to filter by; blank means every game.
    pub fn game(&self) -> Option<&str> {
        self.game.as_deref().filter(|g| !g.is_empty())
    }
}
