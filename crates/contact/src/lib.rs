//! Contact form state machine: field edits, pre-flight validation, and the
//! submission lifecycle `Idle -> Submitting -> {Success, Error}`.
//!
//! The machine is synchronous and owned by the contact view; the actual
//! network call goes through [`delivery::FormDelivery`] on whatever runtime
//! the caller provides. Outcomes and the delayed success expiry are applied
//! back through sequence-guarded methods, so results of an abandoned or
//! superseded attempt fall on the floor instead of corrupting later state.

use std::time::Duration;

use shared::{error::ValidationError, protocol::ContactMessage};

pub mod delivery;

/// How long the success notice stays up before the form returns to idle.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// The one message shown for any delivery failure. The underlying cause is
/// logged, never surfaced.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Unable to send message. Please try again later or contact me directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// One validated submission attempt: the payload to deliver plus the
/// sequence number that guards its outcome and expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub seq: u64,
    pub message: ContactMessage,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactMessage,
    status: SubmissionStatus,
    error: Option<String>,
    submission_seq: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Subject => &self.fields.subject,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submission_seq(&self) -> u64 {
        self.submission_seq
    }

    /// Replace one field value. Any displayed error is cleared, and an error
    /// status returns to idle so the user can correct and retry.
    pub fn edit_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Subject => &mut self.fields.subject,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value.into();
        self.error = None;
        if self.status == SubmissionStatus::Error {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and move into `Submitting`. `None` means there is nothing to
    /// deliver: either a submission is already in flight, or validation
    /// failed and the error message was recorded without touching status.
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        if self.status == SubmissionStatus::Submitting {
            tracing::debug!("submission already in flight; attempt ignored");
            return None;
        }
        if let Err(validation) = self.validate() {
            self.status = SubmissionStatus::Idle;
            self.error = Some(validation.to_string());
            tracing::debug!(%validation, "contact form failed validation");
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.error = None;
        self.submission_seq += 1;
        Some(SubmissionTicket {
            seq: self.submission_seq,
            message: self.fields.clone(),
        })
    }

    /// The delivery for `seq` came back successful: show the success notice
    /// and clear the fields. Stale sequences are dropped.
    pub fn record_success(&mut self, seq: u64) {
        if !self.outcome_is_current(seq) {
            return;
        }
        self.status = SubmissionStatus::Success;
        self.fields = ContactMessage::default();
        self.error = None;
    }

    /// The delivery for `seq` failed: show the generic retry message and
    /// keep the field values so the user can resubmit. Stale sequences are
    /// dropped.
    pub fn record_failure(&mut self, seq: u64) {
        if !self.outcome_is_current(seq) {
            return;
        }
        self.status = SubmissionStatus::Error;
        self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
    }

    /// Delayed expiry of the success notice. Only flips `Success` back to
    /// `Idle` while `seq` is still the current submission.
    pub fn expire_success(&mut self, seq: u64) {
        if self.status == SubmissionStatus::Success && seq == self.submission_seq {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// The user dismissed the outcome banner. Success and error both return
    /// to idle, and a pending validation message is cleared; field values are
    /// untouched so a failed message can still be resubmitted.
    pub fn dismiss_outcome(&mut self) {
        match self.status {
            SubmissionStatus::Success | SubmissionStatus::Error => {
                self.status = SubmissionStatus::Idle;
                self.error = None;
            }
            SubmissionStatus::Idle => {
                self.error = None;
            }
            SubmissionStatus::Submitting => {}
        }
    }

    /// Fresh fields and status for a new page entry. The sequence counter is
    /// retained so outcomes of an abandoned attempt stay stale.
    pub fn reset(&mut self) {
        self.fields = ContactMessage::default();
        self.status = SubmissionStatus::Idle;
        self.error = None;
    }

    fn outcome_is_current(&self, seq: u64) -> bool {
        if seq != self.submission_seq || self.status != SubmissionStatus::Submitting {
            tracing::debug!(
                seq,
                current = self.submission_seq,
                status = ?self.status,
                "stale submission outcome dropped"
            );
            return false;
        }
        true
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let ContactMessage {
            name,
            email,
            subject: _,
            message,
        } = &self.fields;
        if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField);
        }
        if !email_shape_is_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

// Same acceptance as the lax `/^\S+@\S+\.\S+$/` shape the site has always
// used: no whitespace anywhere, an "@" with at least one character before
// it, and a later "." with at least one character on each side. Kept
// deliberately permissive; it checks format, not deliverability.
fn email_shape_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let len = email.len();
    email.char_indices().any(|(at, c)| {
        c == '@'
            && at >= 1
            && email[at + 1..]
                .char_indices()
                .any(|(rel, c)| c == '.' && rel >= 1 && at + 1 + rel + 1 < len)
    })
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod form_tests;
