pub mod builder;
pub mod types;

pub use builder::{
    created, custom, error, error_value, not_found, redirect, success, unauthorized,
    update_or_create, updated,
};
pub use types::{
    Envelope, EnvelopeBody, EnvelopeOptions, RenderedEnvelope, ResultOutcome, StatusCode,
    WrappedEnvelope,
};

#[cfg(test)]
mod tests;
