use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::web;
use arcade_core::ApiError;
use std::future::Ready;

/// Extractor for authenticated requests.
/// Validates the bearer token against the [`Crypto`] in app data.
#[derive(Debug)]
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn username(&self) -> &str {
        self.0.username()
    }
    fn extract(req: &HttpRequest) -> Result<Self, ApiError> {
        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("invalid authorization format".to_string()))?;
        let crypto = req
            .app_data::<web::Data<Crypto>>()
            .ok_or_else(|| ApiError::Internal("token service not configured".to_string()))?;
        let claims = crypto
            .decode(token.trim())
            .inspect_err(|e| log::debug!("rejected token: {}", e))
            .map_err(|_| ApiError::Unauthorized("invalid token".to_string()))?;
        if claims.expired() {
            return Err(ApiError::Unauthorized("token expired".to_string()));
        }
        Ok(Self(claims))
    }
}

impl FromRequest for Auth {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Self::extract(req))
    }
}
