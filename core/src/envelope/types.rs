use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic classification of why a response is being produced,
/// independent of the numeric status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultOutcome {
    Ok,
    Error,
    NotFound,
    Unauthorized,
    NeedRedirect,
}

/// Allow-listed HTTP status values. Codes outside this list are
/// unrepresentable rather than rejected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    MultipleChoices = 300,
    MovedPermanently = 301,
    MovedTemporarily = 302,
    SeeOther = 303,
    TemporaryRedirect = 307,
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Canonical response record. Constructed fresh per call, rendered once,
/// then discarded; it carries no identity across calls.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status_code: StatusCode,
    pub status_result: ResultOutcome,
    pub message: String,
    pub data: Value,
    pub count: Option<i64>,
    pub error: Value,
    pub info: Value,
    pub identity: Value,
    pub redirect_to: Option<String>,
    pub token: Option<String>,
    /// Policy flag only; never serialized into the body.
    pub body_wrap: bool,
}

/// The unwrapped wire record: every [`Envelope`] field except
/// `status_code` and `body_wrap`. `redirect_to` is omitted entirely when
/// absent; `count` and `token` serialize as explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeBody {
    pub status_result: ResultOutcome,
    pub message: String,
    pub data: Value,
    pub count: Option<i64>,
    pub error: Value,
    pub info: Value,
    pub identity: Value,
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

/// Gateway-convention shape: the body is a complete JSON document
/// serialized to a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedEnvelope {
    pub status_code: u16,
    pub body: String,
}

/// The two-shape output union selected by `body_wrap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderedEnvelope {
    Wrapped(WrappedEnvelope),
    Body(EnvelopeBody),
}

impl RenderedEnvelope {
    pub fn as_wrapped(&self) -> Option<&WrappedEnvelope> {
        match self {
            RenderedEnvelope::Wrapped(wrapped) => Some(wrapped),
            RenderedEnvelope::Body(_) => None,
        }
    }

    pub fn as_body(&self) -> Option<&EnvelopeBody> {
        match self {
            RenderedEnvelope::Body(body) => Some(body),
            RenderedEnvelope::Wrapped(_) => None,
        }
    }
}

/// Recognized options for every builder operation. Fields left `None`
/// take the per-operation defaults documented on each operation.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeOptions {
    pub status_code: Option<StatusCode>,
    pub status_result: Option<ResultOutcome>,
    pub message: Option<String>,
    pub data: Option<Value>,
    pub count: Option<i64>,
    pub error: Option<Value>,
    pub info: Option<Value>,
    pub identity: Option<Value>,
    pub redirect_to: Option<String>,
    pub token: Option<String>,
    pub body_wrap: Option<bool>,
}

impl EnvelopeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error(mut self, error: Value) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_info(mut self, info: Value) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_identity(mut self, identity: Value) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn with_redirect_to(mut self, redirect_to: impl Into<String>) -> Self {
        self.redirect_to = Some(redirect_to.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_body_wrap(mut self, body_wrap: bool) -> Self {
        self.body_wrap = Some(body_wrap);
        self
    }

    pub fn with_status_code(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_status_result(mut self, status_result: ResultOutcome) -> Self {
        self.status_result = Some(status_result);
        self
    }
}
