//! Contact form state and submission to the form relay.
//!
//! The form is plain data; the network call sits behind [`FormRelay`] so the
//! browser build can use `fetch` while tests use in-memory fakes.
//!
//! Submission is split in two halves so a reactive view can expose the
//! in-flight state between them:
//!
//! 1. [`ContactForm::begin`] validates, raises the `submitting` flag and
//!    produces the owned [`Submission`] payload.
//! 2. [`ContactForm::finish`] takes the relay outcome, clears the flag,
//!    resets the fields on success and emits exactly one [`Notice`].
//!
//! [`ContactForm::submit`] chains both around a relay call.

use crate::notice::{Notice, Notify};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Public relay endpoint the sites post to.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Form fields, used to point at validation problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Purpose,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Purpose => "Purpose",
            Field::Message => "Message",
        }
    }
}

/// Options offered by the purpose dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Collaboration,
    Interview,
    Freelance,
    Other,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [
        Purpose::Collaboration,
        Purpose::Interview,
        Purpose::Freelance,
        Purpose::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Collaboration => "Collaboration",
            Purpose::Interview => "Interview",
            Purpose::Freelance => "Freelance",
            Purpose::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(Field),
    #[error("email address looks malformed")]
    MalformedEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::MalformedEmail => Field::Email,
        }
    }
}

/// Transport-level failure reported by a [`FormRelay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("could not encode submission: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form is incomplete: {0}")]
    Invalid(#[from] FieldError),
    #[error("a submission is already in flight")]
    Busy,
    #[error("no relay access key configured")]
    MissingAccessKey,
    #[error("relay unreachable: {0}")]
    Network(String),
    #[error("relay rejected the submission with HTTP {status}")]
    Rejected { status: u16 },
}

impl SubmitError {
    /// Failures that reached (or tried to reach) the relay. Both kinds map to
    /// the same user-facing notice.
    pub fn is_transport(&self) -> bool {
        matches!(self, SubmitError::Network(_) | SubmitError::Rejected { .. })
    }
}

impl From<RelayError> for SubmitError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Network(msg) | RelayError::Encode(msg) => SubmitError::Network(msg),
        }
    }
}

/// JSON body accepted by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub purpose: String,
    pub message: String,
}

impl Submission {
    pub fn to_json(&self) -> Result<String, RelayError> {
        serde_json::to_string(self).map_err(|e| RelayError::Encode(e.to_string()))
    }
}

/// Successful hand-off to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
}

/// Outbound channel to the form relay.
///
/// Returns the HTTP status; anything that prevented a response is a
/// [`RelayError`].
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn post(&self, submission: &Submission) -> Result<u16, RelayError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub purpose: String,
    pub message: String,
    #[serde(skip)]
    submitting: bool,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Purpose => &self.purpose,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Purpose => self.purpose = value,
            Field::Message => self.message = value,
        }
    }

    /// Reset all fields to empty strings.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.purpose.clear();
        self.message.clear();
    }

    /// Every field is required; the email needs a `local@domain.tld` shape.
    pub fn validate(&self) -> Result<(), FieldError> {
        for field in [Field::Name, Field::Email, Field::Purpose, Field::Message] {
            if self.field(field).trim().is_empty() {
                return Err(FieldError::Missing(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FieldError::MalformedEmail);
        }
        Ok(())
    }

    /// Validate and enter the submitting state.
    pub fn begin(&mut self, access_key: &str) -> Result<Submission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::Busy);
        }
        self.validate()?;
        if access_key.trim().is_empty() {
            return Err(SubmitError::MissingAccessKey);
        }
        self.submitting = true;
        Ok(Submission {
            access_key: access_key.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Apply the relay outcome. Any 2xx status counts as delivered.
    pub fn finish<N: Notify>(
        &mut self,
        outcome: Result<u16, RelayError>,
        notifier: &mut N,
    ) -> Result<Delivery, SubmitError> {
        self.submitting = false;
        let result = match outcome {
            Ok(status) if (200..300).contains(&status) => Ok(Delivery { status }),
            Ok(status) => Err(SubmitError::Rejected { status }),
            Err(err) => Err(SubmitError::from(err)),
        };

        match &result {
            Ok(delivery) => {
                info!(status = delivery.status, "contact message delivered");
                self.clear();
                notifier.notify(Notice::message_sent());
            }
            Err(err) => {
                warn!(error = %err, "contact message not delivered");
                notifier.notify(Notice::submission_failed());
            }
        }
        result
    }

    pub async fn submit<R, N>(
        &mut self,
        relay: &R,
        access_key: &str,
        notifier: &mut N,
    ) -> Result<Delivery, SubmitError>
    where
        R: FormRelay,
        N: Notify,
    {
        let submission = self.begin(access_key)?;
        let outcome = relay.post(&submission).await;
        self.finish(outcome, notifier)
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            purpose: Purpose::Interview.as_str().into(),
            message: "Hello there".into(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut form = filled();
        form.purpose = "   ".into();
        assert_eq!(form.validate(), Err(FieldError::Missing(Field::Purpose)));
        assert_eq!(
            FieldError::Missing(Field::Purpose).to_string(),
            "Purpose is required"
        );
    }

    #[test]
    fn email_shape_checks() {
        assert!(looks_like_email("a@b.io"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("no-at-sign.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@localhost"));
        assert!(!looks_like_email("a@b@c.com"));
        assert!(!looks_like_email("a b@c.com"));
        assert!(!looks_like_email("a@.com"));
    }

    #[test]
    fn begin_builds_trimmed_payload_and_locks_form() {
        let mut form = filled();
        form.name = "  Ada  ".into();
        let submission = form.begin("key-123").unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.access_key, "key-123");
        assert!(form.is_submitting());
        assert_eq!(form.begin("key-123"), Err(SubmitError::Busy));
    }

    #[test]
    fn payload_json_shape() {
        let submission = filled().begin("k").unwrap();
        let value: serde_json::Value = serde_json::from_str(&submission.to_json().unwrap()).unwrap();
        assert_eq!(value["access_key"], "k");
        assert_eq!(value["purpose"], "Interview");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn finish_treats_any_2xx_as_success() {
        let mut form = filled();
        let mut notices = Vec::new();
        form.begin("k").unwrap();
        assert_eq!(form.finish(Ok(204), &mut notices), Ok(Delivery { status: 204 }));
        assert_eq!(form.name, "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn transport_errors_share_a_notice() {
        assert!(SubmitError::Rejected { status: 500 }.is_transport());
        assert!(SubmitError::Network("offline".into()).is_transport());
        assert!(!SubmitError::Busy.is_transport());
    }

    #[test]
    fn encode_failures_surface_as_network() {
        let err = SubmitError::from(RelayError::Encode("bad".into()));
        assert_eq!(err, SubmitError::Network("bad".into()));
    }
}
