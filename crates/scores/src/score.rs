use serde::Deserialize;
use serde::Serialize;

/// A user's best score in one game, as shown on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub username: String,
    pub game_name: String,
    pub score: i32,
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use arcade_pg::*;

    /// Scores are owned by their user and removed with them.
    impl Schema for Score {
        fn name() -> &'static str {
            SCORES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                SCORES,
                " (
                    user_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    game_name   VARCHAR(64) NOT NULL,
                    score       INTEGER NOT NULL,
                    PRIMARY KEY (user_id, game_name)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_",
                SCORES,
                "_score ON ",
                SCORES,
                " (score DESC);
                 CREATE INDEX IF NOT EXISTS idx_",
                SCORES,
                "_game ON ",
                SCORES,
                " (game_name, score DESC);"
            )
        }
    }
}
