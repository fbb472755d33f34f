//! Announcement creation and visibility

mod common;

use common::{login, register, send, spawn_app};
use http::StatusCode;

#[tokio::test]
async fn hr_publishes_everyone_reads() {
    let app = spawn_app().await;
    register(&app.router, "hr", "hr", "hr@x.com", serde_json::json!({})).await;
    register(&app.router, "employee", "emp", "emp@x.com", serde_json::json!({})).await;
    let hr = login(&app.router, "hr@x.com").await;
    let emp = login(&app.router, "emp@x.com").await;

    // Only HR publishes
    let (status, _) = send(
        &app.router,
        "POST",
        "/announcements",
        Some(&emp),
        Some(serde_json::json!({"title": "nope", "content": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = send(
        &app.router,
        "POST",
        "/announcements",
        Some(&hr),
        Some(serde_json::json!({
            "title": "Office closed Friday",
            "content": "Maintenance work in the building.",
            "category": "facilities",
            "urgency": "high",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["urgency"], "high");
    assert_eq!(json["authorName"], "hr");

    // Unknown urgency is a 400
    let (status, _) = send(
        &app.router,
        "POST",
        "/announcements",
        Some(&hr),
        Some(serde_json::json!({"title": "t", "content": "c", "urgency": "critical"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Every authenticated role reads the list; urgency defaults to medium
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    send(
        &app.router,
        "POST",
        "/announcements",
        Some(&hr),
        Some(serde_json::json!({"title": "Welcome", "content": "New joiners this week"})),
    )
    .await;
    let (status, json) = send(&app.router, "GET", "/announcements", Some(&emp), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Newest first
    assert_eq!(items[0]["title"], "Welcome");
    assert_eq!(items[0]["urgency"], "medium");
}
