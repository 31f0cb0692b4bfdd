//! End-to-end route tests over an in-memory store.
use super::*;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::test;
use arcade_auth::AuthRepository;
use arcade_auth::Crypto;
use arcade_auth::Member;
use arcade_auth::TokenResponse;
use arcade_core::ApiError;
use arcade_scores::Score;
use arcade_scores::ScoreRepository;
use std::collections::HashMap;
use std::sync::Mutex;

const ORIGIN: &str = "http://localhost:3000";

#[derive(Default)]
struct Memory {
    users: Mutex<HashMap<String, (Member, String)>>,
    scores: Mutex<HashMap<(String, String), i32>>,
}

impl AuthRepository for Memory {
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(member.username()) {
            return Err(ApiError::Conflict(arcade_core::conflict(Some("users_username_key"))));
        }
        users.insert(
            member.username().to_string(),
            (member.clone(), hashword.to_string()),
        );
        Ok(())
    }
    async fn lookup(&self, username: &str) -> Result<Option<(Member, String)>, ApiError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }
}

impl ScoreRepository for Memory {
    async fn submit(&self, username: &str, game: &str, score: i32) -> Result<bool, ApiError> {
        if !self.users.lock().unwrap().contains_key(username) {
            return Ok(false);
        }
        let mut scores = self.scores.lock().unwrap();
        let best = scores
            .entry((username.to_string(), game.to_string()))
            .or_insert(i32::MIN);
        let improved = score > *best;
        if improved {
            *best = score;
        }
        Ok(improved)
    }
    async fn top(&self, game: Option<&str>, limit: i64) -> Result<Vec<Score>, ApiError> {
        let mut rows = self
            .scores
            .lock()
            .unwrap()
            .iter()
            .filter(|((_, g), s)| **s > 0 && game.is_none_or(|game| game == g.as_str()))
            .map(|((u, g), s)| Score {
                username: u.clone(),
                game_name: g.clone(),
                score: *s,
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.score.cmp(&a.score).then(a.username.cmp(&b.username)));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(cors(ORIGIN))
                .app_data(web::Data::new(Memory::default()))
                .app_data(web::Data::new(Crypto::new(b"secret")))
                .configure(routes::<Memory>),
        )
        .await
    };
}

fn json(method: test::TestRequest, uri: &str, body: serde_json::Value) -> test::TestRequest {
    method.uri(uri).set_json(body)
}

#[actix_web::test]
async fn register_login_submit_and_rank() {
    let app = app!();
    for name in ["alice", "bob"] {
        let req = json(
            test::TestRequest::post(),
            "/register",
            serde_json::json!({ "username": name, "password": "hunter22" }),
        )
        .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }
    let mut tokens = HashMap::new();
    for name in ["alice", "bob"] {
        let req = json(
            test::TestRequest::post(),
            "/login",
            serde_json::json!({ "username": name, "password": "hunter22" }),
        )
        .to_request();
        let TokenResponse { token } = test::call_and_read_body_json(&app, req).await;
        tokens.insert(name, token);
    }
    for (name, game, score) in [
        ("alice", "snake", 50),
        ("alice", "snake", 30),
        ("bob", "snake", 40),
        ("bob", "tetris", 0),
    ] {
        let req = json(
            test::TestRequest::post(),
            "/submit-score",
            serde_json::json!({ "game_name": game, "score": score }),
        )
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", tokens[name])))
        .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
    let req = test::TestRequest::get().uri("/leaderboard").to_request();
    let board: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        board,
        serde_json::json!([
            { "username": "alice", "game_name": "snake", "score": 50 },
            { "username": "bob",   "game_name": "snake", "score": 40 },
        ])
    );
}

#[actix_web::test]
async fn duplicate_registration_conflicts() {
    let app = app!();
    let body = serde_json::json!({ "username": "alice", "email": "", "password": "hunter22" });
    let first = json(test::TestRequest::post(), "/register", body.clone()).to_request();
    let second = json(test::TestRequest::post(), "/register", body).to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);
    assert_eq!(test::call_service(&app, second).await.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn malformed_body_is_bad_request() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    let response = test::call_service(&app, req).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert!(body["error"].is_string());

    let req = json(
        test::TestRequest::post(),
        "/login",
        serde_json::json!({ "username": "alice" }),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unsupported_method_is_not_allowed() {
    let app = app!();
    let req = test::TestRequest::get().uri("/register").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::METHOD_NOT_ALLOWED);
    let req = test::TestRequest::get().uri("/nowhere").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn options_short_circuits() {
    let app = app!();
    for (uri, origin) in [
        ("/submit-score", None),
        ("/nowhere", None),
        ("/leaderboard", Some(ORIGIN)),
    ] {
        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri(uri);
        let req = match origin {
            Some(origin) => req.insert_header((header::ORIGIN, origin)),
            None => req,
        };
        let response = test::call_service(&app, req.to_request()).await;
        assert_eq!(response.status(), StatusCode::OK, "OPTIONS {}", uri);
    }
}

#[actix_web::test]
async fn preflight_allows_configured_origin() {
    let app = app!();
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/submit-score")
        .insert_header((header::ORIGIN, ORIGIN))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, content-type"))
        .to_request();
    let response = test::call_service(&app, req).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|h| h.to_str().ok()),
        Some(ORIGIN)
    );
}

#[actix_web::test]
async fn long_email_is_bad_request() {
    let app = app!();
    let email = format!("{}@x.io", "a".repeat(300));
    let req = json(
        test::TestRequest::post(),
        "/register",
        serde_json::json!({ "username": "alice", "email": email, "password": "hunter22" }),
    )
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn root_reports_live() {
    let app = app!();
    let req = test::TestRequest::get().uri("/").to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, "Backend is Live!");
}

#[actix_web::test]
async fn forged_token_is_rejected() {
    let app = app!();
    let token = Crypto::new(b"not-the-secret").issue("alice").unwrap();
    let req = json(
        test::TestRequest::post(),
        "/submit-score",
        serde_json::json!({ "game_name": "snake", "score": 10 }),
    )
    .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
