//! Teacher pages and form endpoints

use axum::{
    extract::{Path, State},
    response::{Html, Response},
    Form, Json,
};
use serde_json::{json, Value};

use crate::handlers::{pdf_attachment, success};
use crate::models::{TeacherForm, TeacherPaymentForm};
use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::helpers::{receipt_filename, today};
use crate::utils::logging::log_admin_action;

pub async fn list_teachers(State(state): State<AppState>) -> Result<Html<String>> {
    let teachers = state.services.teacher_service.list_summaries(today()).await?;

    state.templates.render(
        "teachers",
        &json!({
            "academy": state.academy_name(),
            "title": "Teachers",
            "nav": true,
            "currency": state.currency(),
            "teachers": teachers,
        }),
    )
}

pub async fn add_teacher(State(state): State<AppState>, Form(form): Form<TeacherForm>) -> Result<Json<Value>> {
    state.services.teacher_service.add_teacher(&form, today()).await?;
    Ok(success())
}

pub async fn edit_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TeacherForm>,
) -> Result<Json<Value>> {
    state.services.teacher_service.edit_teacher(id, &form).await?;
    Ok(success())
}

pub async fn delete_teacher(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Value>> {
    state.services.teacher_service.delete_teacher(id).await?;
    Ok(success())
}

pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TeacherPaymentForm>,
) -> Result<Json<Value>> {
    state.services.teacher_service.record_payment(id, &form, today()).await?;
    Ok(success())
}

/// Salary receipt download
pub async fn receipt(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    let statement = state.services.teacher_service.statement(id).await?;
    let receipts = &state.services.receipt_service;
    let pdf = receipts.render(&receipts.teacher_receipt(&statement))?;

    log_admin_action("receipt", "teacher", Some(id), None);
    Ok(pdf_attachment(&receipt_filename("salary", &statement.teacher.name), pdf))
}
