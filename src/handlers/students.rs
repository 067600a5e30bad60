//! Student pages and form endpoints

use axum::{
    extract::{Path, Query, State},
    response::{Html, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::handlers::{pdf_attachment, success};
use crate::models::{StudentForm, StudentPaymentForm};
use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::helpers::{receipt_filename, today};
use crate::utils::logging::log_admin_action;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentFilter {
    pub class: String,
}

impl StudentFilter {
    /// The selected class; blank means every class
    pub fn class_name(&self) -> Option<&str> {
        Some(self.class.trim()).filter(|c| !c.is_empty())
    }
}

pub async fn list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<Html<String>> {
    let service = &state.services.student_service;
    let class_filter = filter.class_name();
    let students = service.list_summaries(class_filter, today()).await?;

    state.templates.render(
        "students",
        &json!({
            "academy": state.academy_name(),
            "title": "Students",
            "nav": true,
            "currency": state.currency(),
            "classes": service.classes(),
            "selected_class": class_filter.unwrap_or_default(),
            "students": students,
        }),
    )
}

pub async fn add_student(State(state): State<AppState>, Form(form): Form<StudentForm>) -> Result<Json<Value>> {
    state.services.student_service.add_student(&form, today()).await?;
    Ok(success())
}

pub async fn edit_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<StudentForm>,
) -> Result<Json<Value>> {
    state.services.student_service.edit_student(id, &form).await?;
    Ok(success())
}

pub async fn delete_student(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    state.services.student_service.delete_student(id).await?;
    Ok(success())
}

pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<StudentPaymentForm>,
) -> Result<Json<Value>> {
    state.services.student_service.record_payment(id, &form, today()).await?;
    Ok(success())
}

/// Fee receipt download
pub async fn receipt(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let statement = state.services.student_service.statement(id).await?;
    let receipts = &state.services.receipt_service;
    let pdf = receipts.render(&receipts.student_receipt(&statement))?;

    log_admin_action("receipt", "student", Some(id), None);
    Ok(pdf_attachment(&receipt_filename("receipt", &statement.student.name), pdf))
}
