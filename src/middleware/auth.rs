//! Authentication middleware
//!
//! Guards every administrative route behind the session cookie issued by
//! `POST /login`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::state::AppState;

/// Redirect to `/login` unless the request carries a valid session cookie
pub async fn require_login(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let auth = &state.services.auth_service;
    let token = jar.get(auth.cookie_name()).map(|c| c.value());

    if auth.is_authenticated(token) {
        next.run(request).await
    } else {
        debug!(path = %request.uri().path(), "Unauthenticated request redirected to login");
        Redirect::to("/login").into_response()
    }
}

/// Whether the cookie jar holds a valid session
pub fn has_session(state: &AppState, jar: &CookieJar) -> bool {
    let auth = &state.services.auth_service;
    auth.is_authenticated(jar.get(auth.cookie_name()).map(|c| c.value()))
}
