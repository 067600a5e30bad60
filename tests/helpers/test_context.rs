//! Test application context
//!
//! Builds the full router on top of a migrated temp-file database and offers
//! request helpers that speak plain HTTP to it.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use academy_ledger::{
    config::Settings,
    create_router,
    database::{create_pool, run_migrations, DatabasePool},
    AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router plus the state and database behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub pool: DatabasePool,
    pub settings: Settings,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_settings(Settings::default()).await
    }

    pub async fn with_settings(mut settings: Settings) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = tempfile::tempdir().expect("temp dir");
        let db_path = temp_dir.path().join("academy.db");
        settings.database.url = format!("sqlite://{}", db_path.display());
        settings.database.max_connections = 2;
        settings.auth.session_secret = TEST_SECRET.to_string();

        let pool = create_pool(&settings.database).await.expect("database pool");
        run_migrations(&pool).await.expect("migrations");

        let state = AppState::new(settings.clone(), pool.clone()).expect("app state");
        let router = create_router(state.clone());

        Self {
            router,
            state,
            pool,
            settings,
            _temp_dir: temp_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router response")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("request")).await
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)], cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(encode_form(form))).expect("request")).await
    }

    /// Log in with the configured credentials and return the `name=value` cookie pair
    pub async fn login(&self) -> String {
        let response = self
            .post_form(
                "/login",
                &[
                    ("username", self.settings.auth.username.as_str()),
                    ("password", self.settings.auth.password.as_str()),
                ],
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        session_cookie(&response).expect("session cookie")
    }
}

/// `name=value` part of the first Set-Cookie header
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|pair| pair.trim().to_string())
}

pub fn encode_form(form: &[(&str, &str)]) -> String {
    form.iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn location(response: &Response) -> Option<&str> {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}
