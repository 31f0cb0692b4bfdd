use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;
use arcade_core::ApiError;
use rand::Rng;

/// Argon2 PHC string for a new registration, salted with 16 random bytes.
pub fn hash(password: &str) -> Result<String, ApiError> {
    if password.is_empty() {
        return Err(ApiError::BadRequest("password must not be empty".to_string()));
    }
    SaltString::encode_b64(&rand::rng().random::<[u8; 16]>())
        .and_then(|salt| {
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
        })
        .map_err(|e| ApiError::Internal(format!("password hashing: {}", e)))
}

/// False for a wrong password and for a stored value that is not a PHC string.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword).is_ok_and(|stored| {
        Argon2::default()
            .verify_password(password.as_bytes(), &stored)
            .is_ok()
    })
}
