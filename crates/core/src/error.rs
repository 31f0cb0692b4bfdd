/// Request-path failure. Each variant maps to one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    MethodNotAllowed,
    /// Detail is logged, never sent to the caller.
    Internal(String),
}

impl ApiError {
    /// Message safe to show the caller.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(s) => s,
            Self::Unauthorized(s) => s,
            Self::Conflict(s) => s,
            Self::MethodNotAllowed => "method not allowed",
            Self::Internal(_) => "internal server error",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(s) => write!(f, "bad request: {}", s),
            Self::Unauthorized(s) => write!(f, "unauthorized: {}", s),
            Self::Conflict(s) => write!(f, "conflict: {}", s),
            Self::MethodNotAllowed => write!(f, "method not allowed"),
            Self::Internal(s) => write!(f, "internal: {}", s),
        }
    }
}

impl std::error::Error for ApiError {}

/// Names the field behind a unique-constraint violation.
pub fn conflict(constraint: Option<&str>) -> String {
    match constraint {
        Some(c) if c.contains("username") => "username already taken".to_string(),
        Some(c) if c.contains("email") => "email already registered".to_string(),
        _ => "username or email already exists".to_string(),
    }
}

#[cfg(feature = "database")]
/// Unique violations become [`ApiError::Conflict`]. Anything else is
/// internal and keeps the SQLSTATE and server message for the log, since
/// the driver's `Display` only names the error kind.
impl From<tokio_postgres::Error> for ApiError {
    fn from(e: tokio_postgres::Error) -> Self {
        match e.as_db_error() {
            Some(db) if *db.code() == tokio_postgres::error::SqlState::UNIQUE_VIOLATION => {
                Self::Conflict(conflict(db.constraint()))
            }
            Some(db) => Self::Internal(format!("{} {}", db.code().code(), db.message())),
            None => Self::Internal(format!("{:?}", e)),
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for ApiError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::BadRequest(_) => StatusCode::BAD_REQUEST,
                Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                Self::Conflict(_) => StatusCode::CONFLICT,
                Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
                Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            if let Self::Internal(detail) = self {
                log::error!("internal error: {}", detail);
            }
            HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "error": self.message() }))
        }
    }
}
