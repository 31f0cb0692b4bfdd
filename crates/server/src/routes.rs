use actix_cors::Cors;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::http::Method;
use actix_web::http::header;
use actix_web::web;
use arcade_auth::AuthRepository;
use arcade_core::ApiError;
use arcade_scores::ScoreRepository;

/// Registers every public route against the store `S`.
#[rustfmt::skip]
pub fn routes<S>(cfg: &mut web::ServiceConfig)
where
    S: AuthRepository + ScoreRepository + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _| ApiError::BadRequest(e.to_string()).into()))
        .app_data(web::QueryConfig::default().error_handler(|e, _| ApiError::BadRequest(e.to_string()).into()))
        .service(web::resource("/")            .route(web::get() .to(live))                                   .default_service(web::to(unrouted)))
        .service(web::resource("/register")    .route(web::post().to(arcade_auth::register::<S>))             .default_service(web::to(unrouted)))
        .service(web::resource("/login")       .route(web::post().to(arcade_auth::login::<S>))                .default_service(web::to(unrouted)))
        .service(web::resource("/me")          .route(web::get() .to(arcade_auth::me))                        .default_service(web::to(unrouted)))
        .service(web::resource("/submit-score").route(web::post().to(arcade_scores::submit_score::<S>))       .default_service(web::to(unrouted)))
        .service(web::resource("/leaderboard") .route(web::get() .to(arcade_scores::leaderboard::<S>))        .default_service(web::to(unrouted)))
        .default_service(web::to(missing));
}

/// Browser access for the configured origin, or any origin for `*`.
pub fn cors(origin: &str) -> Cors {
    let cors = match origin {
        "*" => Cors::default().allow_any_origin(),
        origin => Cors::default().allowed_origin(origin),
    };
    cors.allowed_methods(["POST", "GET", "OPTIONS", "PUT", "DELETE"])
        .allowed_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-csrf-token"),
        ])
        .max_age(3600)
}

async fn live() -> HttpResponse {
    HttpResponse::Ok().body("Backend is Live!")
}

/// Known path, unsupported method.
pub(crate) async fn unrouted(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    Err(ApiError::MethodNotAllowed)
}

/// Unknown path.
async fn missing(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }
    HttpResponse::NotFound().body("not found")
}
