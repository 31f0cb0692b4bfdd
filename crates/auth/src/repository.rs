use super::*;
use arcade_core::ApiError;
use arcade_core::ID;
use arcade_core::Unique;
use arcade_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for authentication database operations.
/// Abstracts SQL from the handlers.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    /// Inserts the member. Duplicate username or email is a Conflict.
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), ApiError>;
    /// Finds a member and their password hash by username.
    async fn lookup(&self, username: &str) -> Result<Option<(Member, String)>, ApiError>;
}

impl AuthRepository for Arc<Client> {
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), ApiError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, username, email, hashword) VALUES ($1, $2, $3, $4)"
            ),
            &[
                &member.id().inner(),
                &member.username(),
                &member.email(),
                &hashword,
            ],
        )
        .await?;
        Ok(())
    }

    async fn lookup(&self, username: &str) -> Result<Option<(Member, String)>, ApiError> {
        let row = self
            .query_opt(
                const_format::concatcp!(
                    "SELECT id, username, email, hashword FROM ",
                    USERS,
                    " WHERE username = $1"
                ),
                &[&username],
            )
            .await?;
        Ok(row.map(|row| {
            (
                Member::new(
                    ID::from(row.get::<_, uuid::Uuid>(0)),
                    row.get::<_, String>(1),
                    row.get::<_, Option<String>>(2),
                ),
                row.get::<_, String>(3),
            )
        }))
    }
}
