use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use arcade_core::ApiError;

pub async fn register<R>(
    db: web::Data<R>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: AuthRepository + 'static,
{
    let RegisterRequest {
        username,
        email,
        password,
    } = req.into_inner();
    let member = Member::register(username, email)?;
    let hashword = password::hash(&password)?;
    db.create(&member, &hashword).await?;
    log::info!("registered user {}", member.username());
    Ok(HttpResponse::Created().json(UserInfo {
        username: member.username().to_string(),
    }))
}

pub async fn login<R>(
    db: web::Data<R>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: AuthRepository + 'static,
{
    let invalid = || ApiError::Unauthorized("invalid credentials".to_string());
    let (member, hashword) = db.lookup(&req.username).await?.ok_or_else(invalid)?;
    if !password::verify(&req.password, &hashword) {
        return Err(invalid());
    }
    let token = tokens
        .issue(member.username())
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub async fn me(auth: Auth) -> HttpResponse {
    HttpResponse::Ok().json(UserInfo {
        username: auth.username().to_string(),
    })
}
