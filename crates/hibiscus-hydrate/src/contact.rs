//! Contact form submission boundary.
//!
//! The only write path in the whole layer. Submission never surfaces an
//! error: a transport failure or a rejecting backend yields a
//! `success: false` outcome with user-facing copy, and the out-of-scope UI
//! degrades to the [`mailto_fallback`] link built here — a
//! degraded-but-functional channel, not a dead end.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    CONTACT_SUBMIT_ENDPOINT, MAILTO_DEFAULT_SUBJECT, SUBMIT_FAILURE_MESSAGE,
    SUBMIT_FALLBACK_MESSAGE,
};
use crate::gateway::ContentGateway;

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Result shown to the visitor. `success: false` is informational, not an
/// error state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

/// Wire shape of the submission response; both fields optional in practice.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Submit the contact form to the admin API.
///
/// Any transport failure or unparsable body collapses to a calm
/// `success: false` outcome with fixed copy — the caller decides whether to
/// fall back to [`mailto_fallback`].
pub async fn submit_contact(gateway: &ContentGateway, form: &ContactForm) -> SubmitOutcome {
    let url = gateway.url_for(CONTACT_SUBMIT_ENDPOINT);
    let response = match gateway.http().post(&url).json(form).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "contact submission transport failure");
            return failure_outcome();
        }
    };

    match response.json::<SubmitResponse>().await {
        Ok(body) => SubmitOutcome {
            success: body.success,
            message: body.message.unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string()),
        },
        Err(e) => {
            warn!(error = %e, "contact submission returned an unparsable body");
            failure_outcome()
        }
    }
}

fn failure_outcome() -> SubmitOutcome {
    SubmitOutcome {
        success: false,
        message: SUBMIT_FAILURE_MESSAGE.to_string(),
    }
}

/// Pre-filled `mailto:` link for the degraded submission channel.
///
/// Subject falls back to a fixed phrase when the form has none; the body
/// carries the visitor's name, email, and message so nothing typed is lost.
pub fn mailto_fallback(form: &ContactForm, recipient: &str) -> String {
    let subject = form
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(MAILTO_DEFAULT_SUBJECT);
    let body = format!(
        "Nama: {}\nEmail: {}\n\n{}",
        form.name, form.email, form.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Budi Santoso".to_string(),
            email: "budi@contoh.com".to_string(),
            phone: None,
            subject: None,
            message: "Saya tertarik bermitra".to_string(),
        }
    }

    #[test]
    fn test_mailto_carries_name_email_and_message() {
        let link = mailto_fallback(&form(), "admin@hibiscusefsya.com");

        assert!(link.starts_with("mailto:admin@hibiscusefsya.com?subject="));
        assert!(link.contains(&urlencoding::encode("Pesan dari Website").into_owned()));
        assert!(link.contains(&urlencoding::encode("Nama: Budi Santoso").into_owned()));
        assert!(link.contains(&urlencoding::encode("budi@contoh.com").into_owned()));
        assert!(link.contains(&urlencoding::encode("Saya tertarik bermitra").into_owned()));
    }

    #[test]
    fn test_mailto_uses_form_subject_when_present() {
        let mut f = form();
        f.subject = Some("Franchise Body Care".to_string());
        let link = mailto_fallback(&f, "admin@hibiscusefsya.com");
        assert!(link.contains(&urlencoding::encode("Franchise Body Care").into_owned()));

        // Blank subject falls back to the fixed phrase.
        f.subject = Some("   ".to_string());
        let link = mailto_fallback(&f, "admin@hibiscusefsya.com");
        assert!(link.contains(&urlencoding::encode(MAILTO_DEFAULT_SUBJECT).into_owned()));
    }

    #[test]
    fn test_form_serializes_without_empty_optionals() {
        let wire = serde_json::to_value(form()).unwrap();
        let obj = wire.as_object().unwrap();
        assert!(!obj.contains_key("phone"));
        assert!(!obj.contains_key("subject"));
        assert_eq!(obj["name"], "Budi Santoso");
    }
}
