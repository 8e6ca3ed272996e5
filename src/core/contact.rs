use crate::core::i18n::LanguageContext;
use crate::domain::model::ContactSubmission;
use crate::domain::ports::{ConfigProvider, ContactTransport};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::is_valid_email;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Required,
    InvalidEmail,
}

/// 使用者可自行修正的欄位錯誤
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub problem: FieldProblem,
    pub message: String,
}

/// Toast-style acknowledgment shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent { title: String, message: String },
    Rejected(Vec<FieldError>),
    Failed { title: String, message: String },
}

/// Non-empty fields plus the `local@domain.tld` email shape.
pub fn validate_submission(submission: &ContactSubmission) -> Vec<(ContactField, FieldProblem)> {
    let mut problems = Vec::new();
    if submission.name.is_empty() {
        problems.push((ContactField::Name, FieldProblem::Required));
    }
    if submission.email.is_empty() {
        problems.push((ContactField::Email, FieldProblem::Required));
    } else if !is_valid_email(&submission.email) {
        problems.push((ContactField::Email, FieldProblem::InvalidEmail));
    }
    if submission.message.is_empty() {
        problems.push((ContactField::Message, FieldProblem::Required));
    }
    problems
}

/// Client side of the contact channel: holds the form fields and performs
/// at most one POST per submit.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit<T: ContactTransport + ?Sized>(
        &mut self,
        transport: &T,
        context: &LanguageContext,
    ) -> SubmissionOutcome {
        let problems = validate_submission(&self.fields);
        if !problems.is_empty() {
            let errors = problems
                .into_iter()
                .map(|(field, problem)| {
                    let key = match problem {
                        FieldProblem::Required => "contact.validation.required",
                        FieldProblem::InvalidEmail => "contact.validation.email",
                    };
                    FieldError {
                        field,
                        problem,
                        message: context.t(key),
                    }
                })
                .collect();
            return SubmissionOutcome::Rejected(errors);
        }

        self.submitting = true;
        let result = transport.send(&self.fields).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                // 成功後清空表單
                self.fields = ContactSubmission::default();
                SubmissionOutcome::Sent {
                    title: context.t("contact.success.title"),
                    message: context.t("contact.success.message"),
                }
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                SubmissionOutcome::Failed {
                    title: context.t("contact.error.title"),
                    message: context.t("contact.error.message"),
                }
            }
        }
    }
}

/// POSTs `{name, email, message}` as JSON to a contact endpoint. The
/// response body is returned untouched; the form never looks at it.
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        crate::utils::validation::validate_url("contact_endpoint", &endpoint)?;
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.contact_endpoint(),
            Duration::from_secs(config.request_timeout_secs()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<Vec<u8>> {
        tracing::debug!("Posting contact submission to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SiteError::HttpStatusError {
                status: response.status().as_u16(),
                url: self.endpoint.clone(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::i18n::Language;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransport {
        calls: AtomicUsize,
        succeed: bool,
    }

    impl CountingTransport {
        fn new(succeed: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                succeed,
            }
        }
    }

    #[async_trait]
    impl ContactTransport for CountingTransport {
        async fn send(&self, _submission: &ContactSubmission) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(Vec::new())
            } else {
                Err(SiteError::HttpStatusError {
                    status: 502,
                    url: "mock".to_string(),
                })
            }
        }
    }

    fn filled_form(email: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jane Doe");
        form.set_field(ContactField::Email, email);
        form.set_field(ContactField::Message, "Hello");
        form
    }

    #[tokio::test]
    async fn test_successful_submit_clears_fields() {
        let transport = CountingTransport::new(true);
        let mut form = filled_form("jane@example.com");

        let outcome = form.submit(&transport, &LanguageContext::default()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Sent {
                title: "Message Sent!".to_string(),
                message: "Thank you for reaching out. We'll get back to you soon.".to_string(),
            }
        );
        assert_eq!(form.fields(), &ContactSubmission::default());
        assert!(!form.is_submitting());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_call() {
        let transport = CountingTransport::new(true);
        let mut form = filled_form("not-an-email");

        let outcome = form.submit(&transport, &LanguageContext::default()).await;

        match outcome {
            SubmissionOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, ContactField::Email);
                assert_eq!(errors[0].problem, FieldProblem::InvalidEmail);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        // 驗證失敗不清空欄位
        assert_eq!(form.fields().email, "not-an-email");
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_fields_and_is_generic() {
        let transport = CountingTransport::new(false);
        let mut form = filled_form("jane@example.com");

        let outcome = form
            .submit(&transport, &LanguageContext::new(Language::De))
            .await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                title: "Fehler".to_string(),
                message: "Nachricht konnte nicht gesendet werden. Bitte versuchen Sie es erneut."
                    .to_string(),
            }
        );
        assert_eq!(form.fields().name, "Jane Doe");
    }

    #[test]
    fn test_validate_reports_every_empty_field() {
        let problems = validate_submission(&ContactSubmission::default());
        assert_eq!(
            problems,
            vec![
                (ContactField::Name, FieldProblem::Required),
                (ContactField::Email, FieldProblem::Required),
                (ContactField::Message, FieldProblem::Required),
            ]
        );
    }
}
