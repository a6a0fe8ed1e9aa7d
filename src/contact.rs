use std::cell::RefCell;

use log::{error, info};
use thiserror::Error;
use url::form_urlencoded;

pub const FORM_ENDPOINT: &str = "/";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const FORM_NAME: &str = "contact";
pub const HONEYPOT_FIELD: &str = "bot-field";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly via email.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    Busy,
    #[error("field `{0}` is required")]
    Incomplete(&'static str),
    #[error("form endpoint answered with status {0}")]
    Status(u16),
    #[error("form submission failed: {0}")]
    Transport(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

pub fn encode_submission(draft: &ContactDraft) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("form-name", FORM_NAME);
    serializer.append_pair(HONEYPOT_FIELD, "");
    for field in Field::ALL {
        serializer.append_pair(field.name(), draft.get(field));
    }
    serializer.finish()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Sent => Some(SUCCESS_MESSAGE),
            SubmitStatus::Failed => Some(FAILURE_MESSAGE),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }

    /// Marks the form busy and returns the body to send. Rejected while a
    /// previous submission is outstanding or a field is blank.
    pub fn begin(&mut self) -> Result<String, SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::Busy);
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(SubmitError::Incomplete(field.name()));
        }

        self.status = SubmitStatus::Sending;
        Ok(encode_submission(&self.draft))
    }

    pub fn finish(&mut self, outcome: Result<u16, SubmitError>) -> Result<(), SubmitError> {
        match outcome {
            Ok(status) if (200..300).contains(&status) => {
                self.draft = ContactDraft::default();
                self.status = SubmitStatus::Sent;
                Ok(())
            }
            Ok(status) => {
                self.status = SubmitStatus::Failed;
                Err(SubmitError::Status(status))
            }
            Err(err) => {
                self.status = SubmitStatus::Failed;
                Err(err)
            }
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(&self, path: &str, body: String) -> Result<u16, SubmitError>;
}

pub async fn submit<T: FormTransport>(
    form: &RefCell<ContactForm>,
    transport: &T,
    notify: impl Fn(),
) -> Result<(), SubmitError> {
    let body = form.borrow_mut().begin()?;
    notify();

    let outcome = transport.post_form(FORM_ENDPOINT, body).await;
    let result = form.borrow_mut().finish(outcome);
    notify();

    match &result {
        Ok(()) => info!("contact: message delivered"),
        Err(err) => error!("contact: error sending message: {err}"),
    }

    result
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeTransport {
        outcome: Result<u16, SubmitError>,
        calls: Cell<usize>,
        bodies: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn answering(outcome: Result<u16, SubmitError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                bodies: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for FakeTransport {
        async fn post_form(&self, path: &str, body: String) -> Result<u16, SubmitError> {
            assert_eq!(path, "/");
            self.calls.set(self.calls.get() + 1);
            self.bodies.borrow_mut().push(body);
            tokio::task::yield_now().await;
            self.outcome.clone()
        }
    }

    fn filled_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project Discussion".to_string(),
            message: "Hello & welcome!".to_string(),
        }
    }

    fn filled_form() -> RefCell<ContactForm> {
        RefCell::new(ContactForm {
            draft: filled_draft(),
            ..ContactForm::default()
        })
    }

    #[test]
    fn body_is_url_encoded_with_honeypot() {
        assert_eq!(
            encode_submission(&filled_draft()),
            "form-name=contact&bot-field=&name=Ada+Lovelace&email=ada%40example.com&subject=Project+Discussion&message=Hello+%26+welcome%21"
        );
    }

    #[tokio::test]
    async fn success_clears_all_fields() {
        let form = filled_form();
        let transport = FakeTransport::answering(Ok(200));

        submit(&form, &transport, || ()).await.expect("submission succeeds");

        let form = form.borrow();
        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.status(), &SubmitStatus::Sent);
        assert_eq!(form.notice(), Some(SUCCESS_MESSAGE));
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn server_error_keeps_fields_and_reports_failure() {
        let form = filled_form();
        let transport = FakeTransport::answering(Ok(500));

        let result = submit(&form, &transport, || ()).await;

        assert_eq!(result, Err(SubmitError::Status(500)));
        let form = form.borrow();
        assert_eq!(form.draft, filled_draft());
        assert_eq!(form.status(), &SubmitStatus::Failed);
        assert_eq!(form.notice(), Some(FAILURE_MESSAGE));
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn transport_failure_keeps_fields() {
        let form = filled_form();
        let transport =
            FakeTransport::answering(Err(SubmitError::Transport("network down".to_string())));

        let result = submit(&form, &transport, || ()).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
        assert_eq!(form.borrow().draft, filled_draft());
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let form = filled_form();
        let transport = FakeTransport::answering(Ok(204));

        let (first, second) = tokio::join!(
            submit(&form, &transport, || ()),
            submit(&form, &transport, || ()),
        );

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(SubmitError::Busy));
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_submission_can_be_retried_manually() {
        let form = filled_form();

        let _ = submit(&form, &FakeTransport::answering(Ok(503)), || ()).await;
        let retry = FakeTransport::answering(Ok(200));
        submit(&form, &retry, || ()).await.expect("retry succeeds");

        assert_eq!(retry.bodies.borrow().len(), 1);
        assert_eq!(form.borrow().draft, ContactDraft::default());
    }

    #[tokio::test]
    async fn busy_label_shows_while_in_flight() {
        let form = filled_form();
        let transport = FakeTransport::answering(Ok(200));
        let labels = RefCell::new(Vec::new());

        submit(&form, &transport, || {
            labels.borrow_mut().push(form.borrow().submit_label())
        })
        .await
        .expect("submission succeeds");

        assert_eq!(*labels.borrow(), vec!["Sending...", "Send Message"]);
    }

    #[tokio::test]
    async fn blank_field_is_rejected_without_network_call() {
        let form = filled_form();
        form.borrow_mut().draft.set(Field::Subject, "   ");
        let transport = FakeTransport::answering(Ok(200));

        let result = submit(&form, &transport, || ()).await;

        assert_eq!(result, Err(SubmitError::Incomplete("subject")));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.borrow().status(), &SubmitStatus::Idle);
    }
}
