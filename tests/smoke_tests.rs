//! Smoke tests for the store layer underneath the HTTP handlers.

use loandesk::config::SecurityConfig;
use loandesk::db::Store;
use loandesk::models::contact::ContactMessage;
use loandesk::models::loan::LoanApplication;

async fn spawn_store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to create store")
}

#[tokio::test]
async fn store_bootstraps_and_pings() {
    let store = spawn_store().await;
    store.ping().await.expect("ping failed");
}

#[tokio::test]
async fn user_create_get_verify() {
    let store = spawn_store().await;
    let security = SecurityConfig::default();

    let user = store
        .create_user(
            "smoke",
            Some("555-0199"),
            Some("smoke@example.com"),
            "open sesame",
            &security,
        )
        .await
        .expect("create_user failed");
    assert_eq!(user.username, "smoke");

    let fetched = store
        .get_user_by_username("smoke")
        .await
        .expect("lookup failed")
        .expect("user missing");
    assert_eq!(fetched.email.as_deref(), Some("smoke@example.com"));

    assert!(store.verify_user_password("smoke", "open sesame").await.unwrap());
    assert!(!store.verify_user_password("smoke", "wrong").await.unwrap());
    assert!(!store.verify_user_password("ghost", "open sesame").await.unwrap());

    // The unique index rejects a second row for the same username.
    let duplicate = store
        .create_user("smoke", None, None, "another", &security)
        .await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn loan_insert_defaults_and_counts() {
    let store = spawn_store().await;

    let input = LoanApplication {
        loan_type: Some("personal".to_string()),
        full_name: Some("Smoke Tester".to_string()),
        loan_amount: Some(1500.0),
        ..Default::default()
    };

    let loan = store.create_loan(&input).await.expect("create_loan failed");
    assert_eq!(loan.status, "Pending");
    assert!(chrono::DateTime::parse_from_rfc3339(&loan.applied_at).is_ok());

    let updated = store
        .update_loan_status(loan.id, "Approved")
        .await
        .expect("update failed")
        .expect("loan missing");
    assert_eq!(updated.status, "Approved");

    assert_eq!(store.count_loans_by_full_name("Smoke Tester").await.unwrap(), 1);
    assert_eq!(
        store
            .count_loans_by_full_name_and_status("Smoke Tester", "Approved")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        store
            .count_loans_by_full_name_and_status("Smoke Tester", "Rejected")
            .await
            .unwrap(),
        0
    );

    // Missing loan_type never reaches a row.
    let rejected = store.create_loan(&LoanApplication::default()).await;
    assert!(rejected.is_err());
    assert_eq!(store.list_loans().await.unwrap().len(), 1);
}

#[tokio::test]
async fn contact_requires_every_field() {
    let store = spawn_store().await;

    let full = ContactMessage {
        name: Some("A".to_string()),
        email: Some("a@x.com".to_string()),
        phone: Some("1".to_string()),
        subject: Some("S".to_string()),
        message: Some("M".to_string()),
    };
    let saved = store.create_contact(&full).await.expect("insert failed");
    assert!(chrono::DateTime::parse_from_rfc3339(&saved.sent_at).is_ok());

    let partial = ContactMessage {
        message: None,
        ..full
    };
    assert!(store.create_contact(&partial).await.is_err());
}
