use crate::envelope::{self, EnvelopeOptions, RenderedEnvelope};
use crate::errors::CoreError;
use crate::messages::{rest_message, MessageKey};
use serde_json::Value;

/// The six mutation outcomes [`control_response_null`] knows how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    UpdateOrCreate,
    UpdateMany,
    Increment,
    Decrement,
}

impl MutationKind {
    fn done_key(self) -> MessageKey {
        match self {
            MutationKind::Create => MessageKey::Create,
            MutationKind::Update => MessageKey::Update,
            MutationKind::UpdateOrCreate => MessageKey::UpdateOrCreate,
            MutationKind::UpdateMany => MessageKey::UpdateMany,
            MutationKind::Increment => MessageKey::Increment,
            MutationKind::Decrement => MessageKey::Decrement,
        }
    }

    fn not_done_key(self) -> MessageKey {
        match self {
            MutationKind::Create => MessageKey::NotCreate,
            MutationKind::Update => MessageKey::NotUpdate,
            MutationKind::UpdateOrCreate => MessageKey::NotUpdateOrCreate,
            MutationKind::UpdateMany => MessageKey::NotUpdateMany,
            MutationKind::Increment => MessageKey::NotIncrement,
            MutationKind::Decrement => MessageKey::NotDecrement,
        }
    }
}

/// Maps a mutation result straight to an envelope: truthy data becomes the
/// matching success envelope, falsy or absent data becomes an error
/// envelope with the `NOT_*` message key. Centralizes the
/// "mutation returned nothing, report failure" policy.
pub fn control_response_null(
    data: Option<Value>,
    kind: MutationKind,
    prefix: &str,
    body_wrap: bool,
    identity: Option<Value>,
) -> Result<RenderedEnvelope, CoreError> {
    match data {
        Some(value) if is_truthy(&value) => {
            let opts = EnvelopeOptions {
                data: Some(value),
                message: Some(rest_message(prefix, kind.done_key())),
                body_wrap: Some(body_wrap),
                identity,
                ..Default::default()
            };
            match kind {
                MutationKind::Create => envelope::created(opts),
                MutationKind::UpdateOrCreate => envelope::update_or_create(opts),
                MutationKind::Update
                | MutationKind::UpdateMany
                | MutationKind::Increment
                | MutationKind::Decrement => envelope::updated(opts),
            }
        }
        _ => {
            log::debug!("mutation {:?} produced no data for '{}'", kind, prefix);
            envelope::error(EnvelopeOptions {
                message: Some(rest_message(prefix, kind.not_done_key())),
                body_wrap: Some(body_wrap),
                identity,
                ..Default::default()
            })
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
