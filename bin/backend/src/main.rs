//! Arcade Leaderboard Binary
//!
//! Serves registration, login, score submission and the leaderboard.
//! Configured by flags or environment (DB_URL, JWT_SECRET, BIND_ADDR,
//! CORS_ORIGIN, WORKERS); see `backend --help`.
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    arcade_core::log()?;
    arcade_server::run(arcade_server::Config::parse()).await
}
