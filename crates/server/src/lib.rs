//! Arcade Leaderboard Server
//!
//! Serves registration, login, score submission and the leaderboard from a
//! single actix-web server over PostgreSQL.
//!
//! ## Submodules
//!
//! - [`config`]: command line and environment configuration
//! - [`routes`]: route table, CORS policy and fallbacks
mod config;
mod routes;

pub use config::*;
pub use routes::*;

use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use anyhow::Context;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Connects to the store, creates missing tables, and serves until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    let client = arcade_pg::db(&config.database_url)
        .await
        .context("database connection failed")?;
    arcade_pg::create::<arcade_auth::Member>(&client).await?;
    arcade_pg::create::<arcade_scores::Score>(&client).await?;
    let crypto = web::Data::new(arcade_auth::Crypto::new(config.jwt_secret.as_bytes()));
    let client = web::Data::new(client);
    let origin = config.cors_origin.clone();
    log::info!("starting server on {}", config.bind_addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(cors(&origin))
            .app_data(crypto.clone())
            .app_data(client.clone())
            .service(
                web::resource("/health")
                    .route(web::get().to(health))
                    .default_service(web::to(unrouted)),
            )
            .configure(routes::<Arc<Client>>)
    });
    let server = match config.workers {
        Some(n) => server.workers(n),
        None => server,
    };
    server
        .bind(&config.bind_addr)
        .with_context(|| format!("failed to bind {}", config.bind_addr))?
        .run()
        .await?;
    log::info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests;
