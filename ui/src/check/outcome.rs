use dioxus::prelude::*;

use crate::core::error::SubmitError;
use crate::core::format::format_risk;
use crate::core::normalize::FieldIssue;
use crate::core::upload::UploadError;
use crate::core::verdict::Verdict;
use crate::t;

/// Verdict headline and risk score. Clicking anywhere on it resets the page.
#[component]
pub fn VerdictCard(verdict: Verdict, on_reset: EventHandler<MouseEvent>) -> Element {
    let (modifier, headline) = if verdict.is_fraud {
        ("verdict-card--fraud", t!("verdict-fraud"))
    } else {
        ("verdict-card--legit", t!("verdict-legit"))
    };
    let risk = t!("verdict-risk", percent = format_risk(verdict.fraud_probability));

    rsx! {
        section {
            class: "verdict-card {modifier}",
            role: "status",
            onclick: move |evt| on_reset.call(evt),
            span { class: "verdict-card__icon", aria_hidden: "true",
                if verdict.is_fraud { "⚠️" } else { "✅" }
            }
            div { class: "verdict-card__body",
                h2 { class: "verdict-card__headline", "{headline}" }
                p { class: "verdict-card__score", "{risk}" }
                p { class: "verdict-card__hint", {t!("verdict-reset-hint")} }
            }
        }
    }
}

/// Global error area with an optional retry of the last record.
#[component]
pub fn ErrorBanner(error: SubmitError, can_retry: bool, on_retry: EventHandler<MouseEvent>) -> Element {
    let message = error_message(&error);

    rsx! {
        section { class: "error-banner", role: "alert",
            h2 { class: "error-banner__title", {t!("error-title")} }
            p { class: "error-banner__message", "⚠️ {message}" }
            if can_retry {
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: move |evt| on_retry.call(evt),
                    {t!("button-retry")}
                }
            }
        }
    }
}

/// Localized, user-facing text for an error.
pub fn error_message(error: &SubmitError) -> String {
    match error {
        SubmitError::Normalize(err) => err
            .issues()
            .iter()
            .map(issue_message)
            .collect::<Vec<_>>()
            .join("; "),
        SubmitError::Upload(UploadError::NotJson) => t!("error-not-json"),
        SubmitError::Upload(UploadError::Unreadable) => t!("error-unreadable"),
        SubmitError::Upload(UploadError::InvalidJson(_)) => t!("error-invalid-json"),
        SubmitError::Upload(UploadError::NotAnObject) => t!("error-not-object"),
        SubmitError::Timeout => t!("error-timeout"),
        SubmitError::Network => t!("error-network"),
        SubmitError::Service { status, body } => {
            t!("error-service", status = status.to_string(), body = body.clone())
        }
        SubmitError::InvalidVerdict { detail, .. } => {
            t!("error-invalid-verdict", detail = detail.clone())
        }
        SubmitError::Unexpected(detail) => t!("error-unexpected", detail = detail.clone()),
    }
}

fn issue_message(issue: &FieldIssue) -> String {
    match issue {
        FieldIssue::Missing(field) => t!(
            "error-missing-field",
            lower = field.lower_key(),
            upper = field.canonical_key()
        ),
        FieldIssue::NotNumeric { key, .. } => t!("error-not-numeric", key = key.clone()),
    }
}
