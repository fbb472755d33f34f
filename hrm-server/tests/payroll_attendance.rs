//! Payroll derivation and attendance clocking, including the batch job

mod common;

use common::{login, register, send, spawn_app};
use http::StatusCode;

use hrm_server::db::repository::AttendanceRepository;
use hrm_server::utils::time::today_local;

#[tokio::test]
async fn net_salary_always_recomputed() {
    let app = spawn_app().await;
    let alice = register(
        &app.router,
        "employee",
        "alice",
        "alice@x.com",
        serde_json::json!({}),
    )
    .await;
    register(&app.router, "hr", "hr", "hr@x.com", serde_json::json!({})).await;
    let hr = login(&app.router, "hr@x.com").await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/payroll",
        Some(&hr),
        Some(serde_json::json!({
            "employeeId": alice,
            "month": "2024-06",
            "baseSalary": 5000.0,
            "bonus": 500.0,
            "bonusDescription": "quarterly",
            "deduction": 200.0,
            "deductionDescription": "late days",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["netSalary"].as_f64().unwrap(), 5300.0);
    assert_eq!(json["status"], "Pending");
    let id = json["id"].as_str().unwrap().to_string();

    // Changing one component recomputes the derived net
    let (status, json) = send(
        &app.router,
        "PATCH",
        "/payroll",
        Some(&hr),
        Some(serde_json::json!({"id": id, "bonus": 300.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["netSalary"].as_f64().unwrap(), 5100.0);

    // Status-only change leaves money fields consistent
    let (status, json) = send(
        &app.router,
        "PATCH",
        "/payroll",
        Some(&hr),
        Some(serde_json::json!({"id": id, "status": "Paid"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "Paid");
    assert_eq!(json["netSalary"].as_f64().unwrap(), 5100.0);
}

#[tokio::test]
async fn payroll_visibility_and_filters() {
    let app = spawn_app().await;
    let alice = register(&app.router, "employee", "alice", "alice@x.com", serde_json::json!({})).await;
    register(&app.router, "employee", "bob", "bob@x.com", serde_json::json!({})).await;
    register(&app.router, "manager", "mgr", "mgr@x.com", serde_json::json!({})).await;
    register(&app.router, "hr", "hr", "hr@x.com", serde_json::json!({})).await;
    let hr = login(&app.router, "hr@x.com").await;

    send(
        &app.router,
        "POST",
        "/payroll",
        Some(&hr),
        Some(serde_json::json!({"employeeId": alice, "month": "2024-06", "baseSalary": 4000.0})),
    )
    .await;

    // Employee sees only their own records
    let alice_token = login(&app.router, "alice@x.com").await;
    let (_, json) = send(&app.router, "GET", "/payroll", Some(&alice_token), None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    let bob_token = login(&app.router, "bob@x.com").await;
    let (_, json) = send(&app.router, "GET", "/payroll", Some(&bob_token), None).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // Aggregates filter by month / search / department
    let mgr_token = login(&app.router, "mgr@x.com").await;
    let (_, json) = send(
        &app.router,
        "GET",
        "/payroll?month=2024-06",
        Some(&mgr_token),
        None,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    let (_, json) = send(
        &app.router,
        "GET",
        "/payroll?month=2024-07",
        Some(&mgr_token),
        None,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 0);
    let (_, json) = send(&app.router, "GET", "/payroll?search=ali", Some(&hr), None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Only HR adjusts records
    let (status, _) = send(
        &app.router,
        "PATCH",
        "/payroll",
        Some(&mgr_token),
        Some(serde_json::json!({"id": "payroll:whatever", "bonus": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn clock_in_then_out_derives_hours() {
    let app = spawn_app().await;
    register(&app.router, "employee", "emp", "emp@x.com", serde_json::json!({})).await;
    let emp = login(&app.router, "emp@x.com").await;

    let (status, json) = send(
        &app.router,
        "POST",
        "/employee/attendance/clock-in",
        Some(&emp),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert!(json["clockOut"].is_null());

    // Second clock-in the same day is rejected
    let (status, _) = send(
        &app.router,
        "POST",
        "/employee/attendance/clock-in",
        Some(&emp),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = send(
        &app.router,
        "POST",
        "/employee/attendance/clock-out",
        Some(&emp),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["clockOut"].is_i64());
    assert_eq!(json["autoClockOut"], false);
    assert!(json["hoursWorked"].is_f64());

    // And a second clock-out is rejected
    let (status, _) = send(
        &app.router,
        "POST",
        "/employee/attendance/clock-out",
        Some(&emp),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn auto_clock_out_computes_rounded_hours() {
    let app = spawn_app().await;
    register(&app.router, "employee", "emp", "emp@x.com", serde_json::json!({})).await;
    let emp_token = login(&app.router, "emp@x.com").await;
    let (_, me) = send(&app.router, "GET", "/auth/me", Some(&emp_token), None).await;
    let emp_id: surrealdb::RecordId = me["id"].as_str().unwrap().parse().unwrap();

    // Open record clocked in exactly 8.5h before "now": 09:00 -> 17:30
    let repo = AttendanceRepository::new(app.state.get_db());
    let clock_in = 1_717_225_200_000i64; // arbitrary fixed instant
    let now = clock_in + (8 * 3_600_000 + 30 * 60_000);
    let record = repo
        .clock_in(emp_id, "emp".to_string(), today_local(), clock_in)
        .await
        .unwrap();

    let closed = repo.close_record(&record, now, true).await.unwrap().unwrap();
    assert_eq!(closed.clock_out, Some(now));
    assert!(closed.auto_clock_out);
    assert_eq!(closed.hours_worked, Some(8.5));

    // Closing again matches nothing (single resolution)
    let again = repo.close_record(&record, now + 1000, true).await.unwrap();
    assert!(again.is_none());
}

#[tokio::test]
async fn auto_clock_out_batch_endpoint() {
    let app = spawn_app().await;
    register(&app.router, "employee", "emp1", "emp1@x.com", serde_json::json!({})).await;
    register(&app.router, "employee", "emp2", "emp2@x.com", serde_json::json!({})).await;

    let t1 = login(&app.router, "emp1@x.com").await;
    let t2 = login(&app.router, "emp2@x.com").await;
    send(&app.router, "POST", "/employee/attendance/clock-in", Some(&t1), None).await;
    send(&app.router, "POST", "/employee/attendance/clock-in", Some(&t2), None).await;
    // emp2 clocks out manually; only emp1 is left open
    send(&app.router, "POST", "/employee/attendance/clock-out", Some(&t2), None).await;

    // The batch entry point needs no session (external scheduler)
    let (status, json) = send(
        &app.router,
        "POST",
        "/employee/attendance/auto-clock-out",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    let updated = json["updated"].as_array().unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0]["employeeName"], "emp1");
    assert_eq!(json["skipped"], 0);

    // The closed record carries the auto marker
    let (_, records) = send(&app.router, "GET", "/employee/attendance", Some(&t1), None).await;
    assert_eq!(records[0]["autoClockOut"], true);
    assert!(records[0]["hoursWorked"].is_f64());

    // A second run finds nothing open
    let (status, json) = send(
        &app.router,
        "POST",
        "/employee/attendance/auto-clock-out",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["updated"].as_array().unwrap().len(), 0);
}
