use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
/// How long the sent/failed notice stays up before the form returns to idle.
pub const STATUS_CLEAR_MS: u32 = 5000;

pub const SENT_MESSAGE: &str = "Message sent! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Form has invalid fields")]
    Validation(FieldErrors),
    #[error("Email relay is not configured: {0} is missing")]
    MissingConfig(&'static str),
    #[error("Couldn't reach email relay: {0}")]
    Network(String),
    #[error("Email relay rejected the message ({status}): {body}")]
    Relay { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => "contact_name",
            Self::Email => "contact_email",
            Self::Subject => "contact_subject",
            Self::Message => "contact_message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks every field at once so all messages can be shown together.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(Field::Name, "Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(Field::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.push(Field::Email, "Please enter a valid email address");
        }
        if self.subject.trim().is_empty() {
            errors.push(Field::Subject, "Subject is required");
        }
        if self.message.trim().is_empty() {
            errors.push(Field::Message, "Message is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Sent => Some(SENT_MESSAGE),
            Self::Failed => Some(FAILED_MESSAGE),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn finish<T>(res: &Result<T, ContactError>) -> Self {
        match res {
            Ok(_) => Self::Sent,
            Err(_) => Self::Failed,
        }
    }
}

/// Status plus the generation of the submission that set it, so a stale
/// auto-clear timer never resets a newer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Submission {
    status: SubmitStatus,
    generation: u32,
}

impl Submission {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Starts a new submission. `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<u32> {
        if self.status.is_sending() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.status = SubmitStatus::Sending;
        Some(self.generation)
    }

    pub fn finish<T>(&mut self, generation: u32, res: &Result<T, ContactError>) {
        if generation == self.generation {
            self.status = SubmitStatus::finish(res);
        }
    }

    /// Back to idle once the notice delay passes, unless a newer submission
    /// has started since.
    pub fn clear(&mut self, generation: u32) {
        if generation == self.generation && !self.status.is_sending() {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Tokens are baked in at build time from the `EMAILJS_*` variables.
    pub fn from_build_env() -> Result<Self, ContactError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ContactError> {
        let require = |value: Option<&str>, name: &'static str| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .ok_or(ContactError::MissingConfig(name))
        };
        Ok(Self {
            endpoint: RELAY_ENDPOINT.to_string(),
            service_id: require(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: require(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: require(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name.trim().to_string(),
                from_email: form.email.trim().to_string(),
                subject: form.subject.trim().to_string(),
                message: form.message.trim().to_string(),
            },
        }
    }
}

pub fn check_status(status: u16, body: String) -> Result<(), ContactError> {
    match http::StatusCode::from_u16(status) {
        Ok(code) if code.is_success() => Ok(()),
        _ => Err(ContactError::Relay { status, body }),
    }
}

/// Validates and posts the form to the relay.
#[cfg(feature = "hydrate")]
pub async fn send(form: &ContactForm) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    form.validate().map_err(ContactError::Validation)?;
    let config = RelayConfig::from_build_env()?;
    let body = RelayRequest::new(&config, form);

    let res = Request::post(&config.endpoint)
        .json(&body)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let status = res.status();
    let text = res.text().await.unwrap_or_default();
    check_status(status, text)
}
