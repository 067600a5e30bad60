use axum::{extract::State, response::Html};
use serde_json::json;

use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::helpers::today;

/// Per-class enrolment, fees collected and fees outstanding
pub async fn reports(State(state): State<AppState>) -> Result<Html<String>> {
    let classes = state.services.report_service.class_summaries(today()).await?;

    state.templates.render(
        "reports",
        &json!({
            "academy": state.academy_name(),
            "title": "Reports",
            "nav": true,
            "currency": state.currency(),
            "classes": classes,
        }),
    )
}
