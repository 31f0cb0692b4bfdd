/// Runtime configuration. Every flag falls back to an environment variable.
#[derive(Clone, clap::Parser)]
#[command(name = "backend", about = "Arcade leaderboard backend")]
pub struct Config {
    /// PostgreSQL connection URL.
    #[arg(long, env = "DB_URL")]
    pub database_url: String,
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,
    /// HMAC secret for signing bearer tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,
    /// Browser origin allowed by CORS; `*` allows any.
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,
    /// HTTP worker threads; one per core when unset.
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.jwt_secret.is_empty(), "JWT_SECRET must not be empty");
        anyhow::ensure!(self.workers != Some(0), "WORKERS must be positive");
        Ok(())
    }
}
