//! Delivery pipeline tests.
//!
//! Exercises the submission handler end to end against the in-memory mailer:
//! fail-closed validation, send ordering, and partial transport failure.

use std::sync::Arc;

use holler::testing::*;
use holler::{ContactError, ContactService, ContactSubmission, DeliveryConfig, LocalMailer};

// ============================================================================
// Helper Functions
// ============================================================================

fn complete_config() -> DeliveryConfig {
    DeliveryConfig::new()
        .host("smtp.example.com")
        .credentials("mailer", "hunter2")
        .from_address("noreply@example.com")
        .to_address("owner@example.com")
        .owner_name("Jane Owner")
}

fn valid_submission() -> ContactSubmission {
    ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello")
}

fn service_with(config: DeliveryConfig) -> (ContactService, Arc<LocalMailer>) {
    let mailer = Arc::new(LocalMailer::new());
    let service = ContactService::with_mailer(config, mailer.clone());
    (service, mailer)
}

// ============================================================================
// Fail-Closed Validation
// ============================================================================

#[tokio::test]
async fn empty_fields_are_rejected_before_any_send() {
    for blank in ["name", "email", "subject", "message"] {
        let (service, mailer) = service_with(complete_config());

        let mut submission = valid_submission();
        match blank {
            "name" => submission.name.clear(),
            "email" => submission.email.clear(),
            "subject" => submission.subject.clear(),
            _ => submission.message.clear(),
        }

        let result = service.handle(&submission).await;
        assert_eq!(result.unwrap_err(), ContactError::MissingFields, "blank {blank}");
        assert_no_sends(&mailer);
    }
}

#[tokio::test]
async fn incomplete_config_is_rejected_before_any_send() {
    let incomplete: Vec<DeliveryConfig> = vec![
        {
            let mut c = complete_config();
            c.smtp_host = None;
            c
        },
        {
            let mut c = complete_config();
            c.smtp_user = None;
            c
        },
        {
            let mut c = complete_config();
            c.smtp_pass = None;
            c
        },
        {
            let mut c = complete_config();
            c.from_address = None;
            c
        },
        {
            let mut c = complete_config();
            c.to_address = None;
            c
        },
    ];

    for config in incomplete {
        let (service, mailer) = service_with(config);

        let result = service.handle(&valid_submission()).await;
        assert_eq!(result.unwrap_err(), ContactError::ServerMisconfigured);
        assert_no_sends(&mailer);
    }
}

#[tokio::test]
async fn input_validation_precedes_config_validation() {
    // Both are broken; the client error wins because no config is read
    // before the payload is checked.
    let (service, mailer) = service_with(DeliveryConfig::new());

    let result = service.handle(&ContactSubmission::default()).await;
    assert_eq!(result.unwrap_err(), ContactError::MissingFields);
    assert_no_sends(&mailer);
}

// ============================================================================
// Successful Delivery
// ============================================================================

#[tokio::test]
async fn accepted_submission_sends_owner_mail_then_confirmation() {
    let (service, mailer) = service_with(complete_config());

    service.handle(&valid_submission()).await.unwrap();

    assert_send_count(&mailer, 2);
    assert_sent_to(&mailer, "owner@example.com");
    assert_sent_to(&mailer, "jane@x.com");
    assert_subject_contains(&mailer, "Portfolio Contact: Hi");

    // Owner notification is dispatched strictly before the confirmation
    let emails = mailer.emails();
    assert_eq!(emails[0].email.to[0].email, "owner@example.com");
    assert_eq!(emails[1].email.to[0].email, "jane@x.com");

    // Owner can reply straight to the visitor
    assert_eq!(
        emails[0].email.reply_to.as_ref().unwrap().email,
        "jane@x.com"
    );
}

#[tokio::test]
async fn bodies_echo_the_submission_verbatim_in_plain_text() {
    let (service, mailer) = service_with(complete_config());

    let submission = ContactSubmission::new(
        "Jane",
        "jane@x.com",
        "Question",
        "First line\nSecond line",
    );
    service.handle(&submission).await.unwrap();

    for sent in mailer.emails() {
        let text = sent.email.text_body.as_deref().unwrap();
        assert!(text.contains("First line\nSecond line"));
    }
}

// ============================================================================
// Transport Failure
// ============================================================================

#[tokio::test]
async fn first_send_failure_aborts_the_sequence() {
    let (service, mailer) = service_with(complete_config());
    mailer.set_failure("535 authentication failed");

    let result = service.handle(&valid_submission()).await;
    assert_eq!(result.unwrap_err(), ContactError::DeliveryFailed);

    // Exactly one attempt was made and it failed; the confirmation was
    // never even tried.
    assert_eq!(mailer.delivery_attempts(), 1);
    assert_no_sends(&mailer);
}

#[tokio::test]
async fn second_send_failure_still_reports_delivery_failed() {
    let (service, mailer) = service_with(complete_config());
    mailer.fail_after(1, "connection reset by peer");

    let result = service.handle(&valid_submission()).await;
    assert_eq!(result.unwrap_err(), ContactError::DeliveryFailed);

    // Both sends were attempted, the owner mail was actually delivered,
    // and there is no rollback, yet the caller sees a failure.
    assert_eq!(mailer.delivery_attempts(), 2);
    assert_send_count(&mailer, 1);
    assert_sent_to(&mailer, "owner@example.com");
    assert!(!mailer.sent_to("jane@x.com"));
}

#[tokio::test]
async fn retry_after_failure_is_a_fresh_independent_attempt() {
    let (service, mailer) = service_with(complete_config());
    mailer.set_failure("relay down");

    assert!(service.handle(&valid_submission()).await.is_err());

    mailer.clear_failure();
    service.handle(&valid_submission()).await.unwrap();
    assert_send_count(&mailer, 2);
}
