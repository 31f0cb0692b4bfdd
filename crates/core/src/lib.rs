//! Identifiers, limits, and errors shared by every arcade crate.
//! With feature `server`, [`log()`] also sets up terminal and file logging.
mod error;

pub use error::*;

// ============================================================================
// IDENTITY
// ============================================================================
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Entities addressed by a typed [`ID`].
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

/// UUID tagged with the entity it names, so a member id
/// cannot be passed where some other id is expected.
/// `Default` mints a fresh time-ordered v7 id.
pub struct ID<T>(uuid::Uuid, PhantomData<T>);

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.0
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self(inner, PhantomData)
    }
}
impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.0
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T> Hash for ID<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID({})", self.0)
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

// ============================================================================
// LIMITS
// ============================================================================
/// Lifetime of an issued bearer token.
pub const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);
/// Maximum number of rows returned by a leaderboard query.
pub const LEADERBOARD_LIMIT: i64 = 20;
/// Column widths of the users table, in characters.
pub const USERNAME_MAX: usize = 32;
pub const EMAIL_MAX: usize = 255;
/// Maximum game name length in characters (matches the scores table).
pub const GAME_NAME_MAX: usize = 64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Seconds since the Unix epoch.
pub fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now()))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).map_err(std::io::Error::other)
}
