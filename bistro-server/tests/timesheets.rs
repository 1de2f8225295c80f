mod common;

use common::{app, delete, get, post, put};
use http::StatusCode;
use serde_json::{Value, json};

const DAY: i64 = 1_700_000_000_000;

async fn hire(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/employees",
        json!({"employee": {"name": name, "position": "Server", "wage": 11}}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["employee"]["id"].as_i64().unwrap()
}

async fn log_hours(app: &axum::Router, employee_id: i64, hours: f64) -> Value {
    let (status, body) = post(
        app,
        &format!("/api/employees/{employee_id}/timesheets"),
        json!({"timesheet": {"hours": hours, "rate": 11.5, "date": DAY}}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["timesheet"].clone()
}

#[tokio::test]
async fn timesheets_are_listed_per_employee() {
    let app = app().await;
    let ada = hire(&app, "Ada").await;
    let bob = hire(&app, "Bob").await;

    let t1 = log_hours(&app, ada, 8.0).await;
    let t2 = log_hours(&app, ada, 3.5).await;
    log_hours(&app, bob, 6.0).await;

    assert_eq!(t1["employee_id"], ada);
    assert_eq!(t1["date"], DAY);

    let (status, body) = get(&app, &format!("/api/employees/{ada}/timesheets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timesheets"], json!([t1, t2]));

    let (status, body) = get(&app, "/api/employees/999/timesheets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timesheets"], json!([]));
}

#[tokio::test]
async fn create_requires_hours_rate_and_date() {
    let app = app().await;
    let ada = hire(&app, "Ada").await;
    let uri = format!("/api/employees/{ada}/timesheets");

    let bad = [
        json!({"timesheet": {"rate": 11.5, "date": DAY}}),
        json!({"timesheet": {"hours": 0, "rate": 11.5, "date": DAY}}),
        json!({"timesheet": {"hours": 8, "date": DAY}}),
        json!({"timesheet": {"hours": 8, "rate": 11.5}}),
        json!({}),
    ];
    for body in bad {
        assert_eq!(post(&app, &uri, body).await.0, StatusCode::BAD_REQUEST);
    }
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body["timesheets"], json!([]));
}

#[tokio::test]
async fn create_under_unknown_employee_is_not_found() {
    let app = app().await;
    let (status, _) = post(
        &app,
        "/api/employees/999/timesheets",
        json!({"timesheet": {"hours": 8, "rate": 11.5, "date": DAY}}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_round_trip() {
    let app = app().await;
    let ada = hire(&app, "Ada").await;
    let id = log_hours(&app, ada, 8.0).await["id"].as_i64().unwrap();

    let changed = json!({"timesheet": {"hours": 9.25, "rate": 14, "date": DAY + 86_400_000}});
    let (status, body) = put(&app, &format!("/api/employees/{ada}/timesheets/{id}"), changed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["timesheet"],
        json!({"id": id, "hours": 9.25, "rate": 14.0, "date": DAY + 86_400_000, "employee_id": ada})
    );

    let (_, body) = get(&app, &format!("/api/employees/{ada}/timesheets/{id}")).await;
    assert_eq!(body["timesheet"]["hours"], 9.25);
}

#[tokio::test]
async fn timesheet_is_only_reachable_through_its_employee() {
    let app = app().await;
    let ada = hire(&app, "Ada").await;
    let bob = hire(&app, "Bob").await;
    let sheet = log_hours(&app, ada, 8.0).await;
    let id = sheet["id"].as_i64().unwrap();
    let body = json!({"timesheet": {"hours": 1, "rate": 1, "date": DAY}});

    for employee in [bob, 999] {
        let uri = format!("/api/employees/{employee}/timesheets/{id}");
        assert_eq!(get(&app, &uri).await.0, StatusCode::NOT_FOUND);
        assert_eq!(put(&app, &uri, body.clone()).await.0, StatusCode::NOT_FOUND);
        assert_eq!(delete(&app, &uri).await.0, StatusCode::NOT_FOUND);
    }

    // untouched by the rejected writes
    let (status, resp) = get(&app, &format!("/api/employees/{ada}/timesheets/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["timesheet"], sheet);
}

#[tokio::test]
async fn unknown_timesheet_is_not_found() {
    let app = app().await;
    let ada = hire(&app, "Ada").await;
    let body = json!({"timesheet": {"hours": 8, "rate": 11.5, "date": DAY}});

    assert_eq!(
        put(&app, &format!("/api/employees/{ada}/timesheets/404"), body.clone()).await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        delete(&app, &format!("/api/employees/{ada}/timesheets/404")).await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&app, &format!("/api/employees/{ada}/timesheets/404")).await.0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_removes_timesheet() {
    let app = app().await;
    let ada = hire(&app, "Ada").await;
    let id = log_hours(&app, ada, 8.0).await["id"].as_i64().unwrap();

    let (status, body) = delete(&app, &format!("/api/employees/{ada}/timesheets/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, body) = get(&app, &format!("/api/employees/{ada}/timesheets")).await;
    assert_eq!(body["timesheets"], json!([]));
}
