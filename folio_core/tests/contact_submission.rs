//! Contact submission against in-memory relays.

use folio_core::contact::{
    ContactForm, Delivery, Field, FieldError, FormRelay, Purpose, RelayError, SubmitError,
    Submission,
};
use folio_core::notice::{Notice, Tone};
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use std::cell::RefCell;

/// Answers every post with a fixed outcome and records what it saw.
struct FakeRelay {
    outcome: Result<u16, RelayError>,
    seen: RefCell<Vec<Submission>>,
}

impl FakeRelay {
    fn status(status: u16) -> Self {
        Self {
            outcome: Ok(status),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn offline() -> Self {
        Self {
            outcome: Err(RelayError::Network("connection refused".into())),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl FormRelay for FakeRelay {
    async fn post(&self, submission: &Submission) -> Result<u16, RelayError> {
        self.seen.borrow_mut().push(submission.clone());
        self.outcome.clone()
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(Field::Name, "Grace Hopper");
    form.set(Field::Email, "grace@navy.mil");
    form.set(Field::Purpose, Purpose::Collaboration.as_str());
    form.set(Field::Message, "Let's build a compiler.");
    form
}

#[test]
fn accepted_submission_resets_form_and_notifies_once() {
    let relay = FakeRelay::status(200);
    let mut form = filled_form();
    let mut notices: Vec<Notice> = Vec::new();

    let result = block_on(form.submit(&relay, "access-key", &mut notices));

    assert_eq!(result, Ok(Delivery { status: 200 }));
    assert_eq!(form, ContactForm::default());
    assert!(!form.is_submitting());
    assert_eq!(notices, vec![Notice::message_sent()]);
    assert_eq!(notices[0].tone, Tone::Success);

    let seen = relay.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].access_key, "access-key");
    assert_eq!(seen[0].name, "Grace Hopper");
    assert_eq!(seen[0].purpose, "Collaboration");
}

#[test]
fn rejected_submission_keeps_fields() {
    let relay = FakeRelay::status(500);
    let mut form = filled_form();
    let before = form.clone();
    let mut notices: Vec<Notice> = Vec::new();

    let result = block_on(form.submit(&relay, "access-key", &mut notices));

    assert_eq!(result, Err(SubmitError::Rejected { status: 500 }));
    assert_eq!(form, before);
    assert!(!form.is_submitting());
    assert_eq!(notices, vec![Notice::submission_failed()]);
}

#[test]
fn network_failure_matches_rejection_for_the_visitor() {
    let relay = FakeRelay::offline();
    let mut form = filled_form();
    let before = form.clone();
    let mut notices: Vec<Notice> = Vec::new();

    let result = block_on(form.submit(&relay, "access-key", &mut notices));

    let err = result.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(form, before);
    assert_eq!(notices, vec![Notice::submission_failed()]);
    assert_eq!(relay.calls(), 1);
}

#[test]
fn invalid_form_never_reaches_the_relay() {
    let relay = FakeRelay::status(200);
    let mut form = filled_form();
    form.set(Field::Email, "grace-at-navy");
    let mut notices: Vec<Notice> = Vec::new();

    let result = block_on(form.submit(&relay, "access-key", &mut notices));

    assert_eq!(result, Err(SubmitError::Invalid(FieldError::MalformedEmail)));
    assert_eq!(relay.calls(), 0);
    assert!(notices.is_empty());
    assert!(!form.is_submitting());
}

#[test]
fn blank_access_key_never_reaches_the_relay() {
    let relay = FakeRelay::status(200);
    let mut form = filled_form();
    let before = form.clone();
    let mut notices: Vec<Notice> = Vec::new();

    for key in ["", "   "] {
        let result = block_on(form.submit(&relay, key, &mut notices));
        assert_eq!(result, Err(SubmitError::MissingAccessKey));
    }

    assert_eq!(relay.calls(), 0);
    assert!(notices.is_empty());
    assert_eq!(form, before);
    assert!(!form.is_submitting());
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut form = filled_form();
    let submission = form.begin("access-key").unwrap();
    assert!(form.is_submitting());

    let relay = FakeRelay::status(200);
    let mut notices: Vec<Notice> = Vec::new();
    let second = block_on(form.submit(&relay, "access-key", &mut notices));
    assert_eq!(second, Err(SubmitError::Busy));
    assert_eq!(relay.calls(), 0);

    // The first request completes normally afterwards.
    let first = form.finish(Ok(200), &mut notices);
    assert_eq!(first, Ok(Delivery { status: 200 }));
    assert_eq!(notices.len(), 1);
    assert_eq!(submission.email, "grace@navy.mil");
}

#[test]
fn any_success_status_counts() {
    for status in [200, 201, 204, 299] {
        let mut form = filled_form();
        let mut notices: Vec<Notice> = Vec::new();
        let result = block_on(form.submit(&FakeRelay::status(status), "k", &mut notices));
        assert_eq!(result, Ok(Delivery { status }));
    }
    for status in [199, 301, 404, 429, 503] {
        let mut form = filled_form();
        let mut notices: Vec<Notice> = Vec::new();
        let result = block_on(form.submit(&FakeRelay::status(status), "k", &mut notices));
        assert_eq!(result, Err(SubmitError::Rejected { status }));
        assert_eq!(notices.len(), 1);
    }
}
