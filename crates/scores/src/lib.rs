//! Best-score submission and leaderboard queries.
//!
//! One row per (user, game) holding that user's best score. Writes only ever
//! raise a stored score; reads rank the top rows across one or all games.
//!
//! - [`Score`]: leaderboard row and table schema
//! - [`ScoreRepository`]: conditional upsert and top-N query (feature `database`)
//! - [`submit_score`] / [`leaderboard`]: request handlers (feature `server`)
mod dto;
mod score;

pub use dto::*;
pub use score::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
