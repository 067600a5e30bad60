//! Login and logout handlers

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::middleware::has_session;
use crate::state::AppState;
use crate::utils::errors::Result;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Redirect {
    if has_session(&state, &jar) {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/login")
    }
}

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>> {
    state.templates.render(
        "login",
        &json!({
            "academy": state.academy_name(),
            "title": "Login",
        }),
    )
}

/// Check the submitted credentials and set the session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Json<Value>)> {
    let auth = &state.services.auth_service;
    let token = auth.login(&form.username, &form.password)?;

    let cookie = Cookie::build((auth.cookie_name().to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(json!({ "success": true }))))
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let name = state.services.auth_service.cookie_name().to_string();
    info!("Administrator logged out");

    (jar.remove(Cookie::build((name, "")).path("/")), Redirect::to("/login"))
}
