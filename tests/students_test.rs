//! Student roster, fee payments and receipts over HTTP

mod helpers;

use axum::http::{header, StatusCode};
use helpers::*;
use serde_json::json;

use academy_ledger::utils::helpers::today;

#[tokio::test]
async fn test_add_pay_and_list_student() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let response = app
        .post_form(
            "/students/add",
            &[("name", "Ayesha Khan"), ("class", "9th Grade"), ("monthly_fee", "1500")],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let students = app.state.database.students.list(None).await.unwrap();
    assert_eq!(students.len(), 1);
    let student = &students[0];
    assert_eq!(student.date_added, today());

    let response = app
        .post_form(
            &format!("/students/{}/payment", student.id),
            &[("amount", "1000"), ("payment_method", "Cash"), ("month_year", "March 2025")],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = app
        .state
        .services
        .student_service
        .list_summaries(None, today())
        .await
        .unwrap()
        .remove(0);
    assert_eq!(summary.balance.months_elapsed, 1);
    assert_eq!(summary.balance.total_paid, 1000.0);
    assert_eq!(summary.balance.pending_amount, 500.0);
    assert_eq!(summary.balance.pending_months, 1);

    let response = app.get("/students", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Ayesha Khan"));
    assert!(body.contains("Rs. 500.00"));
}

#[tokio::test]
async fn test_pending_follows_calendar_months() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    // Enrolled four calendar months ago: five months are due
    let student = seed_student(&app, "Usman Tariq", "10th Grade", 2000.0, months_ago(4)).await;
    seed_student_payment(&app, student.id, 3000.0, "First installment").await;
    seed_student_payment(&app, student.id, 2500.0, "Second installment").await;

    let summary = app
        .state
        .services
        .student_service
        .list_summaries(None, today())
        .await
        .unwrap()
        .remove(0);
    assert_eq!(summary.balance.months_elapsed, 5);
    assert_eq!(summary.balance.total_due, 10000.0);
    assert_eq!(summary.balance.pending_amount, 4500.0);
    assert_eq!(summary.balance.paid_months, 2);
    assert_eq!(summary.balance.pending_months, 3);

    let body = body_text(app.get("/students", Some(&cookie)).await).await;
    assert!(body.contains("Rs. 4500.00"));
}

#[tokio::test]
async fn test_class_filter() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    seed_student(&app, "Hamza Ali", "7th Grade", 900.0, today()).await;
    seed_student(&app, "Mariam Noor", "8th Grade", 950.0, today()).await;

    let body = body_text(app.get("/students?class=7th%20Grade", Some(&cookie)).await).await;
    assert!(body.contains("Hamza Ali"));
    assert!(!body.contains("Mariam Noor"));

    let body = body_text(app.get("/students?class=", Some(&cookie)).await).await;
    assert!(body.contains("Hamza Ali"));
    assert!(body.contains("Mariam Noor"));
}

#[tokio::test]
async fn test_edit_keeps_enrollment_date() {
    let app = TestApp::new().await;
    let cookie = app.login().await;
    let enrolled = months_ago(2);
    let student = seed_student(&app, &fake_name(), "5th Grade", 700.0, enrolled).await;

    let response = app
        .post_form(
            &format!("/students/edit/{}", student.id),
            &[("name", "Zainab Bibi"), ("class", "6th Grade"), ("monthly_fee", "750.5")],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = app.state.database.students.find_by_id(student.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Zainab Bibi");
    assert_eq!(updated.class_name, "6th Grade");
    assert_eq!(updated.monthly_fee, 750.5);
    assert_eq!(updated.date_added, enrolled);
}

#[tokio::test]
async fn test_delete_removes_payments() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let removed = seed_student(&app, &fake_name(), "9th Grade", 1000.0, today()).await;
    let kept = seed_student(&app, &fake_name(), "9th Grade", 1000.0, today()).await;
    seed_student_payment(&app, removed.id, 1000.0, "January 2025").await;
    seed_student_payment(&app, removed.id, 1000.0, "February 2025").await;
    seed_student_payment(&app, kept.id, 500.0, "January 2025").await;

    let response = app
        .post_form(&format!("/students/delete/{}", removed.id), &[], Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(count_rows(&app, "students").await, 1);
    assert_eq!(count_rows(&app, "student_payments").await, 1);
    assert!(app.state.database.students.find_by_id(removed.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_student_is_not_found() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let edit = app
        .post_form(
            "/students/edit/404",
            &[("name", "Ghost"), ("class", "9th Grade"), ("monthly_fee", "100")],
            Some(&cookie),
        )
        .await;
    assert_eq!(edit.status(), StatusCode::NOT_FOUND);

    let payment = app
        .post_form(
            "/students/404/payment",
            &[("amount", "100"), ("payment_method", "Cash"), ("month_year", "May 2025")],
            Some(&cookie),
        )
        .await;
    assert_eq!(payment.status(), StatusCode::NOT_FOUND);
    let body = body_json(payment).await;
    assert_eq!(body["success"], json!(false));

    let delete = app.post_form("/students/delete/404", &[], Some(&cookie)).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    let receipt = app.get("/students/404/receipt", Some(&cookie)).await;
    assert_eq!(receipt.status(), StatusCode::NOT_FOUND);

    assert_eq!(count_rows(&app, "student_payments").await, 0);
}

#[tokio::test]
async fn test_invalid_form_is_rejected() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let cases: [&[(&str, &str)]; 4] = [
        &[("name", "Ali"), ("class", "9th Grade"), ("monthly_fee", "abc")],
        &[("name", "Ali"), ("class", "9th Grade"), ("monthly_fee", "-5")],
        &[("name", "   "), ("class", "9th Grade"), ("monthly_fee", "100")],
        &[("name", "Ali"), ("class", "Kindergarten"), ("monthly_fee", "100")],
    ];

    for form in cases {
        let response = app.post_form("/students/add", form, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{form:?}");
        assert_eq!(body_json(response).await["success"], json!(false));
    }

    let student = seed_student(&app, "Ali", "9th Grade", 100.0, today()).await;
    let response = app
        .post_form(
            &format!("/students/{}/payment", student.id),
            &[("amount", ""), ("payment_method", "Cash"), ("month_year", "May 2025")],
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(count_rows(&app, "students").await, 1);
    assert_eq!(count_rows(&app, "student_payments").await, 0);
}

#[tokio::test]
async fn test_receipt_download() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let student = seed_student(&app, "Ali Khan", "11th Grade (1st Year)", 2500.0, months_ago(1)).await;
    seed_student_payment(&app, student.id, 2500.0, "January 2025").await;

    let response = app
        .get(&format!("/students/{}/receipt", student.id), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("filename=\"receipt_Ali_Khan.pdf\""));

    assert!(body_bytes(response).await.starts_with(b"%PDF"));
}
