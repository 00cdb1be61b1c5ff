//! Construction of the two outgoing emails.
//!
//! The owner mail notifies the site operator of a new submission; the user
//! mail is a receipt echoed back to the visitor. Submitted text is untrusted:
//! it is HTML-escaped before interpolation into the HTML bodies, while the
//! plain-text variants carry it verbatim (plain text has no injection
//! surface).

use crate::address::Address;
use crate::config::SmtpSettings;
use crate::contact::ContactSubmission;
use crate::email::Email;

/// Notification mail to the site owner's configured inbox.
///
/// Reply-to is the visitor's address so the owner can answer directly.
pub fn owner_email(settings: &SmtpSettings, submission: &ContactSubmission) -> Email {
    let text = format!(
        "New message from the portfolio contact form.\n\
         \n\
         From: {name} <{email}>\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {message}",
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
    );

    let html = format!(
        "<div style=\"font-family: system-ui, sans-serif; max-width: 600px; margin: 0 auto; padding: 16px;\">\n\
         <h2 style=\"margin: 0 0 12px; font-size: 18px;\">New portfolio contact</h2>\n\
         <p style=\"margin: 0 0 4px;\"><strong>From:</strong> {name} &lt;{email}&gt;</p>\n\
         <p style=\"margin: 0 0 4px;\"><strong>Subject:</strong> {subject}</p>\n\
         <hr style=\"border: none; border-top: 1px solid #ccc; margin: 12px 0;\" />\n\
         <p style=\"margin: 0 0 8px; white-space: pre-line;\">{message}</p>\n\
         </div>",
        name = html_escape(&submission.name),
        email = html_escape(&submission.email),
        subject = html_escape(&submission.subject),
        message = html_escape(&submission.message),
    );

    Email::new()
        .from(sender(settings))
        .to(settings.to.as_str())
        .reply_to(submission.email.as_str())
        .subject(format!("Portfolio Contact: {}", submission.subject))
        .text_body(text)
        .html_body(html)
}

/// Confirmation receipt sent back to the visitor.
pub fn confirmation_email(settings: &SmtpSettings, submission: &ContactSubmission) -> Email {
    let signature = match settings.owner_name.as_deref() {
        Some(name) => format!("Best,\n{name}"),
        None => "Best regards".to_string(),
    };

    let text = format!(
        "Hi {name},\n\
         \n\
         Thanks for reaching out. Here's a copy of what you sent:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         If anything is missing or you want to add more details, just reply\n\
         to this email.\n\
         \n\
         {signature}",
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
    );

    let html = format!(
        "<div style=\"font-family: system-ui, sans-serif; max-width: 600px; margin: 0 auto; padding: 16px;\">\n\
         <h2 style=\"margin: 0 0 12px; font-size: 18px;\">Thanks for reaching out</h2>\n\
         <p style=\"margin: 0 0 8px;\">Hi {name},</p>\n\
         <p style=\"margin: 0 0 8px;\">Here&apos;s a copy of the details you submitted:</p>\n\
         <div style=\"margin: 12px 0; padding: 12px; border-radius: 8px; border: 1px solid #ccc;\">\n\
         <p style=\"margin: 0 0 4px;\"><strong>Name:</strong> {name}</p>\n\
         <p style=\"margin: 0 0 4px;\"><strong>Email:</strong> {email}</p>\n\
         <p style=\"margin: 0 0 4px;\"><strong>Subject:</strong> {subject}</p>\n\
         <p style=\"margin: 8px 0 0;\"><strong>Message:</strong></p>\n\
         <p style=\"margin: 4px 0 0; white-space: pre-line;\">{message}</p>\n\
         </div>\n\
         <p style=\"margin: 12px 0 4px;\">If anything is missing or you want to add more details, simply reply to this email.</p>\n\
         <p style=\"margin: 4px 0 0; white-space: pre-line;\">{signature}</p>\n\
         </div>",
        name = html_escape(&submission.name),
        email = html_escape(&submission.email),
        subject = html_escape(&submission.subject),
        message = html_escape(&submission.message),
        signature = html_escape(&signature),
    );

    let subject = match settings.owner_name.as_deref() {
        Some(name) => format!("Your message to {}: {}", name, submission.subject),
        None => format!("Your message was received: {}", submission.subject),
    };

    Email::new()
        .from(sender(settings))
        .to(submission.email.as_str())
        .subject(subject)
        .text_body(text)
        .html_body(html)
}

/// Sender address, with the owner's display name when configured.
fn sender(settings: &SmtpSettings) -> Address {
    match settings.owner_name.as_deref() {
        Some(name) => Address::with_name(name, settings.from.as_str()),
        None => Address::new(settings.from.as_str()),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
