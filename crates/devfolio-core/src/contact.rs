//! Contact form validation and the submission state machine.
//!
//! The flow is `Idle -> Pending -> Sent -> Idle` on success and
//! `Idle -> Pending -> Idle` on failure. Delivery itself goes through an
//! [`EmailSender`], so the flow can be driven without a network.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::EmailConfig;

/// How long the "sent" confirmation stays up.
pub const SENT_DISPLAY_MS: u32 = 3_000;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message should be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::MessageRequired | Self::MessageTooShort => Field::Message,
        }
    }
}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.0.values().copied()
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Loose `text@text.text` check, matched anywhere in the input.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.insert(FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.insert(FieldError::EmailInvalid);
        }

        if self.message.trim().is_empty() {
            errors.insert(FieldError::MessageRequired);
        } else if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(FieldError::MessageTooShort);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn template_params(&self, to_email: &str) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
            to_email: to_email.to_string(),
        }
    }
}

/// Template variables handed to the email service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

/// Narrow capability for delivering a templated email.
pub trait EmailSender {
    type Error: std::fmt::Display;

    fn send(
        &self,
        config: &EmailConfig,
        params: &TemplateParams,
    ) -> impl Future<Output = Result<(), Self::Error>>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error("a message is already being sent")]
    Busy,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A delivery call is in flight; the submit control is disabled.
    Pending,
    /// Confirmation is showing; the submit control stays disabled.
    Sent,
}

/// Submission state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    phase: SubmitPhase,
    errors: FieldErrors,
}

impl ContactFlow {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    /// Validates and moves to `Pending`.
    ///
    /// Returns the parameters to deliver. On invalid input the field errors
    /// are recorded and the phase stays `Idle`.
    pub fn begin(
        &mut self,
        form: &ContactForm,
        to_email: &str,
    ) -> Result<TemplateParams, ContactError> {
        if !self.can_submit() {
            return Err(ContactError::Busy);
        }
        match form.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.phase = SubmitPhase::Pending;
                Ok(form.template_params(to_email))
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(ContactError::Invalid(errors))
            }
        }
    }

    /// Records the delivery result: `Sent` on success, back to `Idle` on failure.
    pub fn finish(&mut self, result: &Result<(), ContactError>) {
        if self.phase != SubmitPhase::Pending {
            tracing::warn!(phase = ?self.phase, "delivery result without a pending send");
            return;
        }
        self.phase = match result {
            Ok(()) => SubmitPhase::Sent,
            Err(_) => SubmitPhase::Idle,
        };
    }

    /// The confirmation timer ran out.
    pub fn sent_elapsed(&mut self) {
        if self.phase == SubmitPhase::Sent {
            self.phase = SubmitPhase::Idle;
        }
    }
}

/// Performs exactly one delivery call.
pub async fn deliver<S: EmailSender>(
    sender: &S,
    config: &EmailConfig,
    params: &TemplateParams,
) -> Result<(), ContactError> {
    sender.send(config, params).await.map_err(|e| {
        tracing::error!(error = %e, "email sending failed");
        ContactError::Delivery(e.to_string())
    })
}
