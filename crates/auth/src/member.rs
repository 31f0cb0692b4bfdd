use arcade_core::ApiError;
use arcade_core::EMAIL_MAX;
use arcade_core::ID;
use arcade_core::USERNAME_MAX;
use arcade_core::Unique;

/// Registered user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    username: String,
    email: Option<String>,
}

impl Member {
    pub fn new(id: ID<Self>, username: String, email: Option<String>) -> Self {
        Self {
            id,
            username,
            email,
        }
    }
    /// Validates a registration and builds the member it describes.
    /// A blank email counts as no email.
    pub fn register(username: String, email: Option<String>) -> Result<Self, ApiError> {
        if username.trim().is_empty() {
            return Err(ApiError::BadRequest("username must not be empty".to_string()));
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(ApiError::BadRequest(format!(
                "username must be at most {} characters",
                USERNAME_MAX
            )));
        }
        let email = email.filter(|e| !e.trim().is_empty());
        if email.as_ref().is_some_and(|e| e.chars().count() > EMAIL_MAX) {
            return Err(ApiError::BadRequest(format!(
                "email must be at most {} characters",
                EMAIL_MAX
            )));
        }
        Ok(Self::new(ID::default(), username, email))
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use arcade_pg::*;

    /// Users table. The password hash is a database-only column,
    /// not part of the Member domain type.
    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    username    VARCHAR(32) NOT NULL,
                    email       VARCHAR(255),
                    hashword    TEXT NOT NULL,
                    CONSTRAINT ",
                USERS,
                "_username_key UNIQUE (username),
                    CONSTRAINT ",
                USERS,
                "_email_key UNIQUE (email)
                );"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn blank_email_is_dropped() {
        let member = Member::register("alice".to_string(), Some("  ".to_string())).unwrap();
        assert_eq!(member.email(), None);
        let member = Member::register("bob".to_string(), Some("b@x.io".to_string())).unwrap();
        assert_eq!(member.email(), Some("b@x.io"));
    }
    #[test]
    fn blank_username_is_rejected() {
        assert!(matches!(
            Member::register("   ".to_string(), None),
            Err(ApiError::BadRequest(_))
        ));
    }
    #[test]
    fn long_username_is_rejected() {
        assert!(Member::register("x".repeat(USERNAME_MAX), None).is_ok());
        assert!(Member::register("x".repeat(USERNAME_MAX + 1), None).is_err());
    }
    #[test]
    fn long_email_is_rejected() {
        let email = |n: usize| Some(format!("{}@x.io", "a".repeat(n - 5)));
        assert!(Member::register("alice".to_string(), email(EMAIL_MAX)).is_ok());
        assert!(matches!(
            Member::register("alice".to_string(), email(EMAIL_MAX + 1)),
            Err(ApiError::BadRequest(_))
        ));
    }
}
