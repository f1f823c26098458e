use crate::envelope::types::{
    Envelope, EnvelopeBody, EnvelopeOptions, RenderedEnvelope, ResultOutcome, StatusCode,
    WrappedEnvelope,
};
use crate::errors::{error_codes, CoreError};
use serde_json::{json, Value};

impl Envelope {
    /// Serializes the envelope into one of the two wire shapes.
    ///
    /// With `body_wrap` set (the gateway convention where the body must be
    /// a string) the result is `{statusCode, body}` with `body` holding the
    /// complete JSON document; otherwise the structured record is returned
    /// directly for consumers that take values rather than strings.
    pub fn render(&self) -> Result<RenderedEnvelope, CoreError> {
        let error = reduce_error(&self.error)?;

        let body = EnvelopeBody {
            status_result: self.status_result,
            message: self.message.clone(),
            data: self.data.clone(),
            count: self.count,
            error,
            info: self.info.clone(),
            identity: self.identity.clone(),
            token: self.token.clone(),
            redirect_to: self.redirect_to.clone().filter(|r| !r.is_empty()),
        };

        log::trace!(
            "rendering envelope: status={} result={:?} wrap={}",
            self.status_code.as_u16(),
            self.status_result,
            self.body_wrap
        );

        if self.body_wrap {
            let body = serde_json::to_string(&body).map_err(|e| CoreError::Serialization {
                code: error_codes::BODY_SERIALIZATION.to_string(),
                message: format!("Failed to serialize response body: {}", e),
            })?;
            Ok(RenderedEnvelope::Wrapped(WrappedEnvelope {
                status_code: self.status_code.as_u16(),
                body,
            }))
        } else {
            Ok(RenderedEnvelope::Body(body))
        }
    }
}

/// Reduces the opaque error value to its wire form: `null` stays `null`,
/// a message-bearing value keeps only its message string, anything else is
/// JSON-stringified wholesale.
fn reduce_error(error: &Value) -> Result<Value, CoreError> {
    if error.is_null() {
        return Ok(Value::Null);
    }
    if let Some(message) = error.get("message").and_then(Value::as_str) {
        return Ok(Value::String(message.to_string()));
    }
    let raw = serde_json::to_string(error).map_err(|e| CoreError::Serialization {
        code: error_codes::BODY_SERIALIZATION.to_string(),
        message: format!("Failed to serialize error value: {}", e),
    })?;
    Ok(Value::String(raw))
}

/// Wraps a Rust error into a message-bearing value, so that rendering
/// keeps only its display string.
pub fn error_value(err: &dyn std::error::Error) -> Value {
    json!({ "message": err.to_string() })
}

/// 200 / `Ok`. Defaults: `message = "success"`, `data = null`,
/// `count = null`, `body_wrap = true`.
pub fn success(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: StatusCode::Ok,
        status_result: ResultOutcome::Ok,
        message: opts.message.unwrap_or_else(|| "success".to_string()),
        data: opts.data.unwrap_or(Value::Null),
        count: opts.count,
        error: Value::Null,
        info: opts.info.unwrap_or(Value::Null),
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// 201 / `Ok`. Defaults: `message = "created"`, `body_wrap = true`.
pub fn created(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: StatusCode::Created,
        status_result: ResultOutcome::Ok,
        message: opts.message.unwrap_or_else(|| "created".to_string()),
        data: opts.data.unwrap_or(Value::Null),
        count: None,
        error: Value::Null,
        info: opts.info.unwrap_or(Value::Null),
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// 200 / `Ok`. Defaults: `message = "updated"`, `body_wrap = true`.
pub fn updated(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: StatusCode::Ok,
        status_result: ResultOutcome::Ok,
        message: opts.message.unwrap_or_else(|| "updated".to_string()),
        data: opts.data.unwrap_or(Value::Null),
        count: None,
        error: Value::Null,
        info: opts.info.unwrap_or(Value::Null),
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// 200 / `Ok`. Defaults: `message = "update_or_create"`, `body_wrap = true`.
pub fn update_or_create(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: StatusCode::Ok,
        status_result: ResultOutcome::Ok,
        message: opts.message.unwrap_or_else(|| "update_or_create".to_string()),
        data: opts.data.unwrap_or(Value::Null),
        count: None,
        error: Value::Null,
        info: opts.info.unwrap_or(Value::Null),
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// 404 / `NotFound`. Defaults: `message = ""`, `error = null`,
/// `body_wrap = true`. Data is always `null`.
pub fn not_found(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: StatusCode::NotFound,
        status_result: ResultOutcome::NotFound,
        message: opts.message.unwrap_or_default(),
        data: Value::Null,
        count: None,
        error: opts.error.unwrap_or(Value::Null),
        info: Value::Null,
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// `Error` outcome. Defaults: `status_code = 400`, `message = "Error"`,
/// `error = null`, `body_wrap = true`. Data is always `null`.
pub fn error(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: opts.status_code.unwrap_or(StatusCode::BadRequest),
        status_result: ResultOutcome::Error,
        message: opts.message.unwrap_or_else(|| "Error".to_string()),
        data: Value::Null,
        count: None,
        error: opts.error.unwrap_or(Value::Null),
        info: Value::Null,
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// `Unauthorized` outcome. Defaults: `status_code = 401`,
/// `message = "Unauthorized"`, `error = null`, `body_wrap = true`.
pub fn unauthorized(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: opts.status_code.unwrap_or(StatusCode::Unauthorized),
        status_result: ResultOutcome::Unauthorized,
        message: opts.message.unwrap_or_else(|| "Unauthorized".to_string()),
        data: Value::Null,
        count: None,
        error: opts.error.unwrap_or(Value::Null),
        info: Value::Null,
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: None,
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// `NeedRedirect` outcome. Defaults: `status_code = 302`, `message = ""`,
/// `body_wrap = true`. An empty or absent `redirect_to` is omitted from
/// the serialized body rather than emitted as null.
pub fn redirect(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: opts.status_code.unwrap_or(StatusCode::MovedTemporarily),
        status_result: ResultOutcome::NeedRedirect,
        message: opts.message.unwrap_or_default(),
        data: Value::Null,
        count: None,
        error: Value::Null,
        info: Value::Null,
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: opts.redirect_to.filter(|r| !r.is_empty()),
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}

/// Fully caller-supplied envelope. Defaults: `status_code = 200`,
/// `status_result = Ok`, `message = ""`, everything else `null`/`true`.
pub fn custom(opts: EnvelopeOptions) -> Result<RenderedEnvelope, CoreError> {
    Envelope {
        status_code: opts.status_code.unwrap_or(StatusCode::Ok),
        status_result: opts.status_result.unwrap_or(ResultOutcome::Ok),
        message: opts.message.unwrap_or_default(),
        data: opts.data.unwrap_or(Value::Null),
        count: opts.count,
        error: opts.error.unwrap_or(Value::Null),
        info: opts.info.unwrap_or(Value::Null),
        identity: opts.identity.unwrap_or(Value::Null),
        redirect_to: opts.redirect_to.filter(|r| !r.is_empty()),
        token: opts.token,
        body_wrap: opts.body_wrap.unwrap_or(true),
    }
    .render()
}
