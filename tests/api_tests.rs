use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use loandesk::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // A single pooled connection keeps the in-memory database alive and
    // shared for the whole test.
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;

    let state = loandesk::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    loandesk::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/register",
        Some(json!({
            "username": "alice",
            "phone": "555-0100",
            "email": "alice@example.com",
            "password": "first-password"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registration successful");

    let (status, body) = send(
        &app,
        "POST",
        "/register",
        Some(json!({
            "username": "alice",
            "password": "second-password"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");

    // The original record is untouched: the first password still logs in.
    let (status, _) = send(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "alice", "password": "first-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_distinguishes_unknown_user_from_bad_password() {
    let app = spawn_app().await;

    send(
        &app,
        "POST",
        "/register",
        Some(json!({
            "username": "bob",
            "phone": "555-0101",
            "email": "bob@example.com",
            "password": "correct horse"
        })),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "nobody", "password": "whatever"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "bob", "password": "battery staple"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid password");

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({"username": "bob", "password": "correct horse"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["username"], "bob");
    assert_eq!(body["user"]["email"], "bob@example.com");

    // The stored hash never reaches the wire.
    let user = body["user"].as_object().unwrap();
    assert!(!user.contains_key("password"));
    assert!(!user.contains_key("passwordHash"));
}

#[tokio::test]
async fn applied_loan_defaults_to_pending_with_timestamp() {
    let app = spawn_app().await;
    let before = chrono::Utc::now();

    let (status, body) = send(
        &app,
        "POST",
        "/apply-loan",
        Some(json!({
            "loanType": "house",
            "fullName": "Jane Doe",
            "loanAmount": 250000,
            "propertyValue": "400000",
            "propertyLocation": "Springfield",
            "existingLoans": "Yes"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Loan application submitted successfully");

    let (status, body) = send(&app, "GET", "/loan-applications", None).await;
    assert_eq!(status, StatusCode::OK);

    let loans = body.as_array().unwrap();
    assert_eq!(loans.len(), 1);

    let loan = &loans[0];
    assert_eq!(loan["status"], "Pending");
    assert_eq!(loan["loanType"], "house");
    assert_eq!(loan["fullName"], "Jane Doe");
    assert_eq!(loan["propertyLocation"], "Springfield");
    assert_eq!(loan["existingLoans"], true);

    let applied_at = chrono::DateTime::parse_from_rfc3339(loan["appliedAt"].as_str().unwrap())
        .expect("appliedAt should be RFC 3339")
        .with_timezone(&chrono::Utc);
    assert!(applied_at >= before);

    // Fields the caller never sent stay out of the payload.
    let loan = loan.as_object().unwrap();
    assert!(!loan.contains_key("carMake"));
    assert!(!loan.contains_key("jewelType"));
}

#[tokio::test]
async fn apply_loan_without_loan_type_fails_at_the_store() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/apply-loan",
        Some(json!({"fullName": "No Type"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to submit loan application");

    let (_, body) = send(&app, "GET", "/loan-applications", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn loan_applications_come_back_newest_first() {
    let app = spawn_app().await;

    for name in ["first", "second", "third"] {
        let (status, _) = send(
            &app,
            "POST",
            "/apply-loan",
            Some(json!({"loanType": "personal", "fullName": name})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/loan-applications", None).await;
    assert_eq!(status, StatusCode::OK);

    let loans = body.as_array().unwrap();
    assert_eq!(loans.len(), 3);
    assert_eq!(loans[0]["fullName"], "third");
    assert_eq!(loans[2]["fullName"], "first");

    let stamps: Vec<&str> = loans
        .iter()
        .map(|l| l["appliedAt"].as_str().unwrap())
        .collect();
    let mut sorted = stamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(stamps, sorted);
}

#[tokio::test]
async fn my_loans_matches_full_name_exactly() {
    let app = spawn_app().await;

    for (loan_type, full_name) in [
        ("house", "Alice Smith"),
        ("car", "Alice Smith"),
        ("personal", "alice smith"),
        ("business", "Bob Brown"),
    ] {
        send(
            &app,
            "POST",
            "/apply-loan",
            Some(json!({"loanType": loan_type, "fullName": full_name})),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/my-loans/Alice%20Smith", None).await;
    assert_eq!(status, StatusCode::OK);

    let loans = body.as_array().unwrap();
    assert_eq!(loans.len(), 2);
    assert!(loans.iter().all(|l| l["fullName"] == "Alice Smith"));

    // Case differs -> no match; unknown name -> empty, not an error.
    let (status, body) = send(&app, "GET", "/my-loans/ALICE%20SMITH", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = send(&app, "GET", "/my-loans/Charlie", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_loan_status_round_trip() {
    let app = spawn_app().await;

    send(
        &app,
        "POST",
        "/apply-loan",
        Some(json!({"loanType": "jewel", "fullName": "Dana Jones"})),
    )
    .await;

    let (_, body) = send(&app, "GET", "/loan-applications", None).await;
    let id = body[0]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/update-loan-status/{id}"),
        Some(json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Status updated successfully");
    assert_eq!(body["loan"]["id"].as_i64().unwrap(), id);
    assert_eq!(body["loan"]["status"], "Approved");

    let (_, body) = send(&app, "GET", "/loan-applications", None).await;
    assert_eq!(body[0]["status"], "Approved");

    // There is no status vocabulary; any string sticks.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/update-loan-status/{id}"),
        Some(json!({"status": "On Hold"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan"]["status"], "On Hold");
}

#[tokio::test]
async fn update_loan_status_rejects_bad_identifiers() {
    let app = spawn_app().await;

    send(
        &app,
        "POST",
        "/apply-loan",
        Some(json!({"loanType": "car", "fullName": "Eve"})),
    )
    .await;

    // Well-formed id that matches nothing.
    let (status, body) = send(
        &app,
        "PUT",
        "/update-loan-status/999999",
        Some(json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Loan not found");

    // Malformed id is rejected before the store is touched.
    let (status, body) = send(
        &app,
        "PUT",
        "/update-loan-status/64c1f2a9b3d4e5f60718293a",
        Some(json!({"status": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid loan ID format");

    // Neither attempt created or changed anything.
    let (_, body) = send(&app, "GET", "/loan-applications", None).await;
    let loans = body.as_array().unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0]["status"], "Pending");
}

#[tokio::test]
async fn contact_submission_round_trip() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/contact",
        Some(json!({
            "name": "A",
            "email": "a@x.com",
            "phone": "1",
            "subject": "S",
            "message": "M"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact message saved successfully");
}

#[tokio::test]
async fn contact_with_missing_field_fails_at_the_store() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/contact",
        Some(json!({
            "name": "A",
            "email": "a@x.com",
            "phone": "1",
            "subject": "S"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to save contact message");
}

#[tokio::test]
async fn loan_stats_count_per_full_name_and_status() {
    let app = spawn_app().await;

    for loan_type in ["house", "car", "education"] {
        send(
            &app,
            "POST",
            "/apply-loan",
            Some(json!({"loanType": loan_type, "fullName": "Dana Jones"})),
        )
        .await;
    }
    send(
        &app,
        "POST",
        "/apply-loan",
        Some(json!({"loanType": "personal", "fullName": "Someone Else"})),
    )
    .await;

    let (_, body) = send(&app, "GET", "/my-loans/Dana%20Jones", None).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();

    send(
        &app,
        "PUT",
        &format!("/update-loan-status/{}", ids[0]),
        Some(json!({"status": "Approved"})),
    )
    .await;
    send(
        &app,
        "PUT",
        &format!("/update-loan-status/{}", ids[1]),
        Some(json!({"status": "Rejected"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/loan-stats/Dana%20Jones", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], 3);
    assert_eq!(body["approved"], 1);
    assert_eq!(body["rejected"], 1);

    let (status, body) = send(&app, "GET", "/loan-stats/Nobody", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], 0);
    assert_eq!(body["approved"], 0);
    assert_eq!(body["rejected"], 0);
}

#[tokio::test]
async fn users_listing_projects_public_fields_only() {
    let app = spawn_app().await;

    send(
        &app,
        "POST",
        "/register",
        Some(json!({
            "username": "carol",
            "phone": "555-0102",
            "email": "carol@example.com",
            "password": "pw-one"
        })),
    )
    .await;
    send(
        &app,
        "POST",
        "/register",
        Some(json!({"username": "dave", "password": "pw-two"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);

    let carol = users
        .iter()
        .find(|u| u["username"] == "carol")
        .unwrap()
        .as_object()
        .unwrap();
    assert_eq!(carol["email"], "carol@example.com");
    assert_eq!(carol["phone"], "555-0102");
    assert!(!carol.contains_key("password"));
    assert!(!carol.contains_key("passwordHash"));
    // address is part of the projection shape but never populated
    assert!(!carol.contains_key("address"));

    let dave = users
        .iter()
        .find(|u| u["username"] == "dave")
        .unwrap()
        .as_object()
        .unwrap();
    assert!(!dave.contains_key("email"));
    assert!(!dave.contains_key("phone"));
}

#[tokio::test]
async fn cors_allows_only_the_configured_origin() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/loan-applications")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/loan-applications")
                .header("Origin", "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
