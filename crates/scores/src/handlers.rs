use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use arcade_auth::Auth;
use arcade_core::ApiError;
use arcade_core::LEADERBOARD_LIMIT;

pub async fn submit_score<R>(
    db: web::Data<R>,
    auth: Auth,
    req: web::Json<Submission>,
) -> Result<HttpResponse, ApiError>
where
    R: ScoreRepository + 'static,
{
    req.validate()?;
    let improved = db.submit(auth.username(), &req.game_name, req.score).await?;
    match improved {
        true => log::info!("{} set a best of {} in {}", auth.username(), req.score, req.game_name),
        false => log::debug!("{} scored {} in {}, not a best", auth.username(), req.score, req.game_name),
    }
    Ok(HttpResponse::Ok().json(Receipt::processed(improved)))
}

pub async fn leaderboard<R>(
    db: web::Data<R>,
    query: web::Query<Board>,
) -> Result<HttpResponse, ApiError>
where
    R: ScoreRepository + 'static,
{
    let scores = db.top(query.game(), LEADERBOARD_LIMIT).await?;
    Ok(HttpResponse::Ok().json(scores))
}
