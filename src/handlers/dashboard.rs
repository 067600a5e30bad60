use axum::{extract::State, response::Html};
use serde_json::json;

use crate::state::AppState;
use crate::utils::errors::Result;

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>> {
    let stats = state.services.report_service.dashboard().await?;

    state.templates.render(
        "dashboard",
        &json!({
            "academy": state.academy_name(),
            "title": "Dashboard",
            "nav": true,
            "currency": state.currency(),
            "stats": stats,
        }),
    )
}
