//! HTTP handlers module
//!
//! This module contains the route handlers and assembles the router

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod reports;
pub mod students;
pub mod teachers;

use axum::{
    http::header,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{log_requests, require_login};
use crate::state::AppState;
use crate::utils::helpers::attachment_disposition;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/students", get(students::list_students))
        .route("/students/add", post(students::add_student))
        .route("/students/edit/:id", post(students::edit_student))
        .route("/students/delete/:id", post(students::delete_student))
        .route("/students/:id/payment", post(students::record_payment))
        .route("/students/:id/receipt", get(students::receipt))
        .route("/teachers", get(teachers::list_teachers))
        .route("/teachers/add", post(teachers::add_teacher))
        .route("/teachers/edit/:id", post(teachers::edit_teacher))
        .route("/teachers/delete/:id", post(teachers::delete_teacher))
        .route("/teachers/:id/payment", post(teachers::record_payment))
        .route("/teachers/:id/receipt", get(teachers::receipt))
        .route("/reports", get(reports::reports))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_login));

    Router::new()
        .route("/", get(auth::index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/health", get(health::health))
        .merge(protected)
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Body returned by every successful form submission
pub(crate) fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

/// PDF download response
pub(crate) fn pdf_attachment(filename: &str, pdf: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, attachment_disposition(filename)),
        ],
        pdf,
    )
        .into_response()
}
