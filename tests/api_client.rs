mod helpers;

use a2p_academy::api::{ClientError, FormData, Submission};
use helpers::{client_for, HostEvent, MockBackend, UNREACHABLE};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

fn registration() -> FormData {
    [
        ("full_name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("course", "A2P Foundations"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn inquiry() -> FormData {
    [
        ("name", "Grace Hopper"),
        ("email", "grace@example.com"),
        ("message", "When does the next cohort start?"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

// ============================================
// Session
// ============================================

#[tokio::test]
async fn test_current_user_unreachable_is_none() {
    let (client, host) = client_for(UNREACHABLE);

    assert_eq!(client.current_user().await, None);
    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_current_user_error_status_is_none() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("GET", "/auth/user", 500, json!({ "error": "boom" }))
        .await;
    let (client, _host) = backend.client();

    assert_eq!(client.current_user().await, None);
}

#[tokio::test]
async fn test_current_user_malformed_body_is_none() {
    let backend = MockBackend::start().await;
    backend
        .respond_text("GET", "/auth/user", 200, "<html>oops</html>")
        .await;
    let (client, _host) = backend.client();

    assert_eq!(client.current_user().await, None);
}

#[tokio::test]
async fn test_current_user_bare_object() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "GET",
            "/auth/user",
            200,
            json!({ "name": "Ada", "picture": "https://example.com/ada.png" }),
        )
        .await;
    let (client, _host) = backend.client();

    let user = client.current_user().await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.picture.as_deref(), Some("https://example.com/ada.png"));
}

#[tokio::test]
async fn test_session_envelope() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "GET",
            "/auth/user",
            200,
            json!({ "user": { "name": "Ada", "email": "ada@example.com" }, "status": "logged_in" }),
        )
        .await;
    let (client, _host) = backend.client();

    let user = client.session().await.unwrap().unwrap();
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_session_distinguishes_signed_out_from_failure() {
    let signed_out = MockBackend::start().await;
    signed_out
        .respond_json(
            "GET",
            "/auth/user",
            200,
            json!({ "user": null, "status": "not_logged_in" }),
        )
        .await;
    let (client, _host) = signed_out.client();
    assert!(matches!(client.session().await, Ok(None)));

    let unauthorized = MockBackend::start().await;
    unauthorized
        .respond_json("GET", "/auth/user", 401, json!({ "error": "Not logged in" }))
        .await;
    let (client, _host) = unauthorized.client();
    assert!(matches!(client.session().await, Ok(None)));

    let broken = MockBackend::start().await;
    broken
        .respond_json("GET", "/auth/user", 500, json!({ "message": "db down" }))
        .await;
    let (client, _host) = broken.client();
    match client.session().await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected status error, got {:?}", other),
    }

    let (client, _host) = client_for(UNREACHABLE);
    let err = client.session().await.unwrap_err();
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn test_login_navigates_to_google_flow() {
    let (client, host) = client_for("http://localhost:5000/");

    client.login();

    assert_eq!(
        host.events(),
        vec![HostEvent::Navigate(
            "http://localhost:5000/auth/google".to_string()
        )]
    );
}

#[tokio::test]
async fn test_logout_reloads_on_success() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "GET",
            "/auth/logout",
            200,
            json!({ "success": true, "message": "Logged out successfully" }),
        )
        .await;
    let (client, host) = backend.client();

    client.logout().await;

    assert_eq!(host.events(), vec![HostEvent::Reload]);
}

#[tokio::test]
async fn test_logout_without_success_does_nothing() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("GET", "/auth/logout", 200, json!({ "success": false }))
        .await;
    let (client, host) = backend.client();

    client.logout().await;
    assert!(host.events().is_empty());

    let (client, host) = client_for(UNREACHABLE);
    client.logout().await;
    assert!(host.events().is_empty(), "failures are logged, not alerted");
}

// ============================================
// Submissions
// ============================================

#[tokio::test]
async fn test_registration_accepted_returns_body() {
    let backend = MockBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "course": "A2P Foundations"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&backend.server)
        .await;
    let (client, host) = backend.client();

    let outcome = client.submit_registration(&registration()).await;

    assert_eq!(
        outcome,
        Submission::Accepted {
            data: json!({ "success": true })
        }
    );
    assert_eq!(
        host.alerts(),
        vec!["✅ Registration successful! We will contact you soon.".to_string()]
    );
}

#[tokio::test]
async fn test_registration_created_status_is_success() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "POST",
            "/api/register",
            201,
            json!({ "status": "success", "registration_id": 4 }),
        )
        .await;
    let (client, _host) = backend.client();

    let outcome = client.submit_registration(&registration()).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.data().unwrap()["registration_id"], json!(4));
}

#[tokio::test]
async fn test_registration_rejected_extracts_error() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("POST", "/api/register", 400, json!({ "error": "missing field" }))
        .await;
    let (client, host) = backend.client();

    let outcome = client.submit_registration(&registration()).await;

    assert_eq!(
        outcome,
        Submission::Rejected {
            error: "missing field".to_string()
        }
    );
    assert_eq!(host.alerts(), vec!["❌ missing field".to_string()]);
}

#[tokio::test]
async fn test_registration_rejected_with_message_body() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "POST",
            "/api/register",
            400,
            json!({
                "status": "error",
                "message": "Invalid email format",
                "errors": { "email": "Invalid email format" }
            }),
        )
        .await;
    let (client, _host) = backend.client();

    let outcome = client.submit_registration(&registration()).await;
    assert_eq!(outcome.error(), Some("Invalid email format"));
}

#[tokio::test]
async fn test_registration_rejected_without_reason_uses_default() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("POST", "/api/register", 422, json!({}))
        .await;
    let (client, host) = backend.client();

    let outcome = client.submit_registration(&registration()).await;

    assert_eq!(outcome.error(), Some("Registration failed"));
    assert_eq!(host.alerts(), vec!["❌ Registration failed".to_string()]);
}

#[tokio::test]
async fn test_registration_network_failure() {
    let (client, host) = client_for(UNREACHABLE);

    let outcome = client.submit_registration(&registration()).await;

    let error = outcome.error().expect("rejected");
    assert!(error.starts_with("Request failed"), "{}", error);
    assert_eq!(
        host.alerts(),
        vec!["❌ Error submitting registration".to_string()]
    );
}

#[tokio::test]
async fn test_contact_outcomes() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("POST", "/api/contact", 201, json!({ "inquiry_id": 9 }))
        .await;
    let (client, host) = backend.client();

    assert!(client.submit_contact(&inquiry()).await.is_success());
    assert_eq!(
        host.alerts(),
        vec![
            "✅ Thank you! Your inquiry has been received. We will contact you soon."
                .to_string()
        ]
    );

    let failing = MockBackend::start().await;
    failing
        .respond_json("POST", "/api/contact", 500, json!({ "status": "error" }))
        .await;
    let (client, host) = failing.client();

    let outcome = client.submit_contact(&inquiry()).await;
    assert_eq!(outcome.error(), Some("Failed to submit inquiry"));
    assert_eq!(host.alerts(), vec!["❌ Failed to submit inquiry".to_string()]);

    let (client, host) = client_for(UNREACHABLE);
    assert!(!client.submit_contact(&inquiry()).await.is_success());
    assert_eq!(host.alerts(), vec!["❌ Error submitting inquiry".to_string()]);
}

#[tokio::test]
async fn test_submit_is_silent() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("POST", "/api/contact", 400, json!({ "error": "missing field" }))
        .await;
    let (client, host) = backend.client();

    let err = client.submit("/api/contact", &inquiry()).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Backend returned 400: missing field");
    assert!(host.events().is_empty());
}

// ============================================
// Admin listings
// ============================================

#[tokio::test]
async fn test_listings_fall_back_to_empty_when_unreachable() {
    let (client, host) = client_for(UNREACHABLE);

    assert!(client.all_registrations().await.is_empty());
    assert!(client.all_inquiries().await.is_empty());
    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_listings_fall_back_to_empty_on_error_status() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("GET", "/api/registrations", 500, json!({ "status": "error" }))
        .await;
    backend
        .respond_text("GET", "/api/inquiries", 200, "not json")
        .await;
    let (client, _host) = backend.client();

    assert!(client.all_registrations().await.is_empty());
    assert!(client.all_inquiries().await.is_empty());
}

#[tokio::test]
async fn test_fetch_distinguishes_empty_from_failed() {
    let backend = MockBackend::start().await;
    backend
        .respond_json("GET", "/api/registrations", 200, json!([]))
        .await;
    backend
        .respond_json("GET", "/api/inquiries", 503, json!({ "error": "maintenance" }))
        .await;
    let (client, _host) = backend.client();

    assert!(client.fetch_registrations().await.unwrap().is_empty());
    assert!(matches!(
        client.fetch_inquiries().await,
        Err(ClientError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_listings_decode_both_shapes() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "GET",
            "/api/registrations",
            200,
            json!([
                { "id": 2, "full_name": "Ada", "course": "A2P", "created_at": "2024-03-05 14:30:00" },
                { "id": 1, "full_name": "Alan", "status": "pending" }
            ]),
        )
        .await;
    backend
        .respond_json(
            "GET",
            "/api/inquiries",
            200,
            json!({
                "status": "success",
                "count": 1,
                "inquiries": [{ "id": 3, "name": "Grace", "message": "Hi" }]
            }),
        )
        .await;
    let (client, _host) = backend.client();

    let registrations = client.all_registrations().await;
    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].id, 2);
    assert!(registrations[0].submitted_at().is_some());
    assert_eq!(registrations[1].status.as_deref(), Some("pending"));

    let inquiries = client.all_inquiries().await;
    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0].name.as_deref(), Some("Grace"));
}

// ============================================
// Health
// ============================================

#[tokio::test]
async fn test_backend_status_true_on_success() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "GET",
            "/api/health",
            200,
            json!({ "status": "Backend is running", "database": "connected", "version": "1.0" }),
        )
        .await;
    let (client, host) = backend.client();

    assert!(client.check_backend_status().await);
    assert!(host.events().is_empty());

    let health = client.health().await.unwrap();
    assert_eq!(health.database.as_deref(), Some("connected"));
    assert_eq!(health.version.as_deref(), Some("1.0"));
}

#[tokio::test]
async fn test_backend_status_false_otherwise() {
    let backend = MockBackend::start().await;
    backend
        .respond_json(
            "GET",
            "/api/health",
            503,
            json!({ "status": "Backend running but database error", "error": "locked" }),
        )
        .await;
    let (client, _host) = backend.client();
    assert!(!client.check_backend_status().await);
    assert!(client.health().await.is_err());

    let (client, _host) = client_for(UNREACHABLE);
    assert!(!client.check_backend_status().await);
}
