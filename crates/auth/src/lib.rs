//! Authentication and identity management.
//!
//! JWT-based bearer tokens with Argon2 password hashing.
//!
//! ## Identity Types
//!
//! - [`Member`]: Registered user with credentials
//!
//! ## Security
//!
//! - [`Crypto`]: JWT signing and verification
//! - [`Claims`]: JWT payload structure
//! - [`password`]: Argon2 hashing and verification
//!
//! ## HTTP (feature `server`)
//!
//! - [`register`] / [`login`] / [`me`]: request handlers
//! - [`Auth`]: extractor that gates protected routes
mod claims;
mod crypto;
mod dto;
mod member;
pub mod password;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use member::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
