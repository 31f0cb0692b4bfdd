use super::*;
use arcade_core::ApiError;
use arcade_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Keeps the best score per (user, game) and ranks them.
#[allow(async_fn_in_trait)]
pub trait ScoreRepository {
    /// Inserts the score, or raises the stored one if `score` is strictly
    /// greater. Returns whether a row was written.
    async fn submit(&self, username: &str, game: &str, score: i32) -> Result<bool, ApiError>;
    /// Positive scores, highest first, at most `limit`, optionally for one game.
    async fn top(&self, game: Option<&str>, limit: i64) -> Result<Vec<Score>, ApiError>;
}

/// Single statement so concurrent submissions for the same pair cannot race.
const SUBMIT: &str = const_format::concatcp!(
    "INSERT INTO ",
    SCORES,
    " (user_id, game_name, score)
     SELECT id, $1, $2 FROM ",
    USERS,
    " WHERE username = $3
     ON CONFLICT (user_id, game_name)
     DO UPDATE SET score = EXCLUDED.score
     WHERE EXCLUDED.score > ",
    SCORES,
    ".score"
);

const TOP: &str = const_format::concatcp!(
    "SELECT u.username, s.game_name, s.score FROM ",
    SCORES,
    " s
     JOIN ",
    USERS,
    " u ON s.user_id = u.id
     WHERE s.score > 0
       AND ($1::TEXT IS NULL OR s.game_name = $1)
     ORDER BY s.score DESC, u.username ASC
     LIMIT $2"
);

impl ScoreRepository for Arc<Client> {
    async fn submit(&self, username: &str, game: &str, score: i32) -> Result<bool, ApiError> {
        Ok(self.execute(SUBMIT, &[&game, &score, &username]).await? > 0)
    }

    async fn top(&self, game: Option<&str>, limit: i64) -> Result<Vec<Score>, ApiError> {
        Ok(self
            .query(TOP, &[&game, &limit])
            .await?
            .into_iter()
            .map(|row| Score {
                username: row.get::<_, String>(0),
                game_name: row.get::<_, String>(1),
                score: row.get::<_, i32>(2),
            })
            .collect())
    }
}
