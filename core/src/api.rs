pub use crate::control::{control_response_null, MutationKind};
pub use crate::envelope::{
    created, custom, error, error_value, not_found, redirect, success, unauthorized,
    update_or_create, updated, Envelope, EnvelopeBody, EnvelopeOptions, RenderedEnvelope,
    ResultOutcome, StatusCode, WrappedEnvelope,
};
pub use crate::errors::CoreError;
pub use crate::messages::{
    parse_message_key, rest_message, rest_message_with_suffix, MessageKey,
};
pub use crate::query::{
    normalise_filter, normalise_paginate, parse_query_string, Paginate, DEFAULT_LIMIT,
    DEFAULT_SKIP, PAGINATION_PARAMS,
};
