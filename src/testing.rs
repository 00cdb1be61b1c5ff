//! Assertion helpers for pipeline tests.
//!
//! Built on [`LocalMailer`]'s capture storage; failure messages summarize
//! what was actually sent so a failing assertion reads like a report.
//!
//! ```rust,ignore
//! use holler::testing::*;
//!
//! service.handle(&submission).await?;
//!
//! assert_send_count(&mailer, 2);
//! assert_sent_to(&mailer, "owner@example.com");
//! assert_subject_contains(&mailer, "Portfolio Contact");
//! ```

use crate::local::{LocalMailer, SentEmail};

/// Format captured emails for assertion failure messages.
fn summarize(emails: &[SentEmail]) -> String {
    if emails.is_empty() {
        return "  (no emails sent)".to_string();
    }

    emails
        .iter()
        .enumerate()
        .map(|(i, sent)| {
            let e = &sent.email;
            let to = e
                .to
                .iter()
                .map(|a| a.email.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let from = e
                .from
                .as_ref()
                .map(|a| a.email.as_str())
                .unwrap_or("<none>");
            format!("  {}. To: [{}], From: {}, Subject: \"{}\"", i + 1, to, from, e.subject)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that no send was attempted.
///
/// # Panics
///
/// Panics if any email was captured.
pub fn assert_no_sends(mailer: &LocalMailer) {
    let emails = mailer.emails();
    assert!(
        emails.is_empty(),
        "Expected no send attempts, but {} email(s) were sent.\n\nEmails sent:\n{}",
        emails.len(),
        summarize(&emails)
    );
}

/// Assert that exactly `count` sends were made.
///
/// # Panics
///
/// Panics if the count differs.
pub fn assert_send_count(mailer: &LocalMailer, count: usize) {
    let emails = mailer.emails();
    assert_eq!(
        emails.len(),
        count,
        "Expected {} send(s), got {}.\n\nEmails sent:\n{}",
        count,
        emails.len(),
        summarize(&emails)
    );
}

/// Assert that some email was sent to `email`.
///
/// # Panics
///
/// Panics if no captured email has that recipient.
pub fn assert_sent_to(mailer: &LocalMailer, email: &str) {
    let emails = mailer.emails();
    assert!(
        mailer.sent_to(email),
        "Expected an email to {}, but none matched.\n\nEmails sent:\n{}",
        email,
        summarize(&emails)
    );
}

/// Assert that some email's subject contains `text`.
///
/// # Panics
///
/// Panics if no captured subject matches.
pub fn assert_subject_contains(mailer: &LocalMailer, text: &str) {
    let emails = mailer.emails();
    assert!(
        mailer.sent_with_subject_containing(text),
        "Expected a subject containing \"{}\", but none matched.\n\nEmails sent:\n{}",
        text,
        summarize(&emails)
    );
}
