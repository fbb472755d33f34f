//! Leave request workflow: submission, approval guards, terminal states

mod common;

use common::{login, register, send, spawn_app};
use http::StatusCode;

struct LeaveSetup {
    app: common::TestApp,
    alice_token: String,
    bob_token: String,
    eve_token: String,
    hr_token: String,
}

/// alice (employee) reports to bob (manager); eve manages someone else
async fn setup() -> LeaveSetup {
    let app = spawn_app().await;
    let alice = register(
        &app.router,
        "employee",
        "alice",
        "alice@x.com",
        serde_json::json!({}),
    )
    .await;
    let carol = register(
        &app.router,
        "employee",
        "carol",
        "carol@x.com",
        serde_json::json!({}),
    )
    .await;
    register(
        &app.router,
        "manager",
        "bob",
        "bob@x.com",
        serde_json::json!({"team": [alice]}),
    )
    .await;
    register(
        &app.router,
        "manager",
        "eve",
        "eve@x.com",
        serde_json::json!({"team": [carol]}),
    )
    .await;
    register(&app.router, "hr", "hr", "hr@x.com", serde_json::json!({})).await;

    let alice_token = login(&app.router, "alice@x.com").await;
    let bob_token = login(&app.router, "bob@x.com").await;
    let eve_token = login(&app.router, "eve@x.com").await;
    let hr_token = login(&app.router, "hr@x.com").await;

    LeaveSetup {
        app,
        alice_token,
        bob_token,
        eve_token,
        hr_token,
    }
}

async fn submit_request(s: &LeaveSetup) -> serde_json::Value {
    let (status, json) = send(
        &s.app.router,
        "POST",
        "/leave",
        Some(&s.alice_token),
        Some(serde_json::json!({
            "leaveType": "annual",
            "startDate": "2024-06-01",
            "endDate": "2024-06-03",
            "reason": "family trip",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["status"], "Pending");
    json
}

#[tokio::test]
async fn approval_end_to_end() {
    let s = setup().await;
    let request = submit_request(&s).await;
    let id = request["id"].as_str().unwrap();
    let created_at = request["createdAt"].as_i64().unwrap();

    let (status, json) = send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.bob_token),
        Some(serde_json::json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["status"], "Approved");
    // Approver identity and timestamp land together with the status
    let approved_by = json["approvedBy"].as_str().unwrap();
    assert!(approved_by.starts_with("account:"));
    assert!(json["approvalDate"].as_i64().unwrap() >= created_at);
}

#[tokio::test]
async fn second_resolution_attempt_is_404() {
    let s = setup().await;
    let request = submit_request(&s).await;
    let id = request["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.bob_token),
        Some(serde_json::json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // A second attempt must not silently re-approve with a new approver
    let (status, _) = send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.hr_token),
        Some(serde_json::json!({"status": "Rejected"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = send(
        &s.app.router,
        "GET",
        &format!("/leave/{id}"),
        Some(&s.alice_token),
        None,
    )
    .await;
    assert_eq!(json["status"], "Approved");
}

#[tokio::test]
async fn manager_outside_team_is_denied() {
    let s = setup().await;
    let request = submit_request(&s).await;
    let id = request["id"].as_str().unwrap();

    let (status, _) = send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.eve_token),
        Some(serde_json::json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // HR needs no team membership
    let (status, json) = send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.hr_token),
        Some(serde_json::json!({"status": "Rejected"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["status"], "Rejected");
}

#[tokio::test]
async fn pending_is_not_a_decision() {
    let s = setup().await;
    let request = submit_request(&s).await;
    let id = request["id"].as_str().unwrap();

    let (status, _) = send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.bob_token),
        Some(serde_json::json!({"status": "Pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_only_owner_and_only_pending() {
    let s = setup().await;
    let request = submit_request(&s).await;
    let id = request["id"].as_str().unwrap().to_string();

    // Manager cannot delete someone else's request
    let (status, _) = send(
        &s.app.router,
        "DELETE",
        &format!("/leave/{id}"),
        Some(&s.bob_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Owner deletes while pending
    let (status, json) = send(
        &s.app.router,
        "DELETE",
        &format!("/leave/{id}"),
        Some(&s.alice_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");

    let (status, _) = send(
        &s.app.router,
        "GET",
        &format!("/leave/{id}"),
        Some(&s.alice_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A resolved request cannot be deleted
    let request = submit_request(&s).await;
    let id = request["id"].as_str().unwrap().to_string();
    send(
        &s.app.router,
        "PUT",
        &format!("/leave/{id}"),
        Some(&s.bob_token),
        Some(serde_json::json!({"status": "Approved"})),
    )
    .await;
    let (status, _) = send(
        &s.app.router,
        "DELETE",
        &format!("/leave/{id}"),
        Some(&s.alice_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn invalid_date_range_is_400() {
    let s = setup().await;
    let (status, _) = send(
        &s.app.router,
        "POST",
        "/leave",
        Some(&s.alice_token),
        Some(serde_json::json!({
            "leaveType": "annual",
            "startDate": "2024-06-05",
            "endDate": "2024-06-03",
            "reason": "backwards",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn role_scoped_lists_and_single_read_guard() {
    let s = setup().await;
    submit_request(&s).await;

    // Owner sees own list
    let (_, json) = send(&s.app.router, "GET", "/leave", Some(&s.alice_token), None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Team manager sees it, outside manager does not
    let (_, json) = send(&s.app.router, "GET", "/leave", Some(&s.bob_token), None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    let (_, json) = send(&s.app.router, "GET", "/leave", Some(&s.eve_token), None).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // HR sees everything
    let (_, json) = send(&s.app.router, "GET", "/leave", Some(&s.hr_token), None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Single-record read is blocked for the outside manager
    let (_, list) = send(&s.app.router, "GET", "/leave", Some(&s.alice_token), None).await;
    let id = list[0]["id"].as_str().unwrap();
    let (status, _) = send(
        &s.app.router,
        "GET",
        &format!("/leave/{id}"),
        Some(&s.eve_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn bulk_decision_enforces_team_guard_per_item() {
    let s = setup().await;

    // alice's request (bob's team) + carol's request (eve's team)
    let alice_req = submit_request(&s).await;
    let carol_token = login(&s.app.router, "carol@x.com").await;
    let (status, carol_req) = send(
        &s.app.router,
        "POST",
        "/leave",
        Some(&carol_token),
        Some(serde_json::json!({
            "leaveType": "sick",
            "startDate": "2024-07-01",
            "endDate": "2024-07-02",
            "reason": "flu",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let alice_id = alice_req["id"].as_str().unwrap();
    let carol_id = carol_req["id"].as_str().unwrap();

    // Bob resolves both ids in bulk: only his team member's goes through
    let (status, json) = send(
        &s.app.router,
        "PUT",
        "/manager/leave-requests",
        Some(&s.bob_token),
        Some(serde_json::json!({
            "requestIds": [alice_id, carol_id],
            "status": "Approved",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["updated"].as_array().unwrap().len(), 1);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 1);
    assert_eq!(json["skipped"][0], carol_id);

    // Carol's request is untouched
    let (_, json) = send(
        &s.app.router,
        "GET",
        &format!("/leave/{carol_id}"),
        Some(&carol_token),
        None,
    )
    .await;
    assert_eq!(json["status"], "Pending");
}
