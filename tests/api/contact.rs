//! tests/api/contact.rs

use crate::helpers::{spawn_app, spawn_app_with_smtp, SmtpBehaviour, RECEIVER, SMTP_USER};
use serde_json::{json, Value};

fn valid_submission() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "Hello there, I love your portfolio!"
    })
}

async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Response was not JSON");
    body["error"]
        .as_str()
        .expect("Response has no error message")
        .to_owned()
}

#[tokio::test]
async fn contact_returns_a_200_for_a_valid_submission() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_contact(valid_submission()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Response was not JSON");
    assert_eq!(body, json!({"message": "Message sent successfully!"}));
}

#[tokio::test]
async fn contact_relays_the_message_to_the_owner() {
    // Arrange
    let app = spawn_app().await;

    // Act
    app.post_contact(valid_submission()).await;

    // Assert
    let email = app.smtp_server.received_message();
    assert!(email.contains("Subject: New message from Jane Doe <jane@example.com>"));
    assert!(email.contains(&format!("To: {}", RECEIVER)));
    assert!(email.contains(SMTP_USER));
    assert!(email.contains("Portfolio Contact Form"));
    assert!(email.contains("Hello there, I love your portfolio!"));
}

#[tokio::test]
async fn contact_returns_a_400_when_data_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({"email": "jane@example.com", "message": "Hello there, friend!"}),
            "missing the name",
        ),
        (json!({"name": "Jane Doe", "message": "Hello there, friend!"}), "missing the email"),
        (json!({"name": "Jane Doe", "email": "jane@example.com"}), "missing the message"),
        (
            json!({"name": "", "email": "jane@example.com", "message": "Hello there, friend!"}),
            "an empty name",
        ),
        (json!({}), "missing every field"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_contact(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        assert_eq!(error_message(response).await, "All fields are required.");
    }
    assert!(app.smtp_server.received_messages().is_empty());
}

#[tokio::test]
async fn contact_returns_a_400_when_the_body_is_not_a_json_object() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("application/json", "{not json"),
        ("application/json", "[]"),
        ("text/plain", "name=Jane"),
        ("application/json", ""),
    ];

    for (content_type, body) in test_cases {
        let response = app.post_contact_raw(content_type, body.into()).await;

        assert_eq!(400, response.status().as_u16(), "body: {:?}", body);
        assert_eq!(error_message(response).await, "All fields are required.");
    }
}

#[tokio::test]
async fn contact_ignores_json_sent_with_another_content_type() {
    // Arrange
    let app = spawn_app().await;
    let body = valid_submission().to_string();

    // Act
    let response = app.post_contact_raw("text/plain", body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!(error_message(response).await, "All fields are required.");
    assert!(app.smtp_server.received_messages().is_empty());
}

#[tokio::test]
async fn contact_accepts_json_with_a_charset_parameter() {
    let app = spawn_app().await;
    let body = valid_submission().to_string();

    let response = app
        .post_contact_raw("application/json; charset=utf-8", body)
        .await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.smtp_server.received_messages().len(), 1);
}

#[tokio::test]
async fn contact_accepts_non_latin_text_measured_like_a_browser() {
    let app = spawn_app().await;
    let body = json!({"name": "😀", "email": "a@b.c", "message": "नमस्ते दोस्त"});

    let response = app.post_contact(body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_a_400_when_name_is_too_short() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (json!("J"), "a single character"),
        (json!("   J   "), "a single character padded with spaces"),
        (json!(42), "a number"),
    ];

    for (name, description) in test_cases {
        let mut body = valid_submission();
        body["name"] = name;

        // Act
        let response = app.post_contact(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the name was {}.",
            description
        );
        assert_eq!(
            error_message(response).await,
            "Name must be at least 2 characters."
        );
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_email_is_invalid() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("a@b", "no dot in the domain"),
        ("jane.example.com", "no at sign"),
        ("jane doe@example.com", "whitespace"),
        ("@example.com", "nothing before the at sign"),
    ];

    for (email, description) in test_cases {
        let mut body = valid_submission();
        body["email"] = json!(email);

        // Act
        let response = app.post_contact(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the email had {}.",
            description
        );
        assert_eq!(error_message(response).await, "Invalid email address.");
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_message_is_too_short() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_submission();
    body["message"] = json!("  too short  ");

    // Act
    let response = app.post_contact(body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        error_message(response).await,
        "Message must be at least 10 characters."
    );
}

#[tokio::test]
async fn contact_accepts_the_shortest_valid_values() {
    let app = spawn_app().await;
    let body = json!({"name": "Jo", "email": "a@b.c", "message": "0123456789"});

    let response = app.post_contact(body).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.smtp_server.received_messages().len(), 1);
}

#[tokio::test]
async fn contact_reports_only_the_first_failing_check() {
    let app = spawn_app().await;
    let body = json!({"name": "J", "email": "nope", "message": "short"});

    let response = app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        error_message(response).await,
        "Name must be at least 2 characters."
    );
}

#[tokio::test]
async fn contact_returns_a_500_when_the_smtp_server_rejects_the_credentials() {
    // Arrange
    let app = spawn_app_with_smtp(SmtpBehaviour::RejectAuth).await;

    // Act
    let response = app.post_contact(valid_submission()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.expect("Response was not JSON");
    assert_eq!(body, json!({"error": "Internal server error"}));
    assert!(app.smtp_server.received_messages().is_empty());
}

#[tokio::test]
async fn contact_returns_a_500_when_the_smtp_server_rejects_the_message() {
    let app = spawn_app_with_smtp(SmtpBehaviour::RejectMessage).await;

    let response = app.post_contact(valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(error_message(response).await, "Internal server error");
}

#[tokio::test]
async fn contact_returns_a_500_when_the_smtp_server_is_unreachable() {
    let app = spawn_app_with_smtp(SmtpBehaviour::Offline).await;

    let response = app.post_contact(valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    assert_eq!(error_message(response).await, "Internal server error");
}

#[tokio::test]
async fn each_submission_gets_its_own_delivery_attempt() {
    let app = spawn_app().await;

    for _ in 0..3 {
        let response = app.post_contact(valid_submission()).await;
        assert_eq!(200, response.status().as_u16());
    }

    assert_eq!(app.smtp_server.received_messages().len(), 3);
}
