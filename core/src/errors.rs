use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("PATTERN ERROR: {code} - {message}")]
    Pattern { code: String, message: String },

    #[error("SERIALIZATION ERROR: {code} - {message}")]
    Serialization { code: String, message: String },
}

/// Stable machine-readable codes carried inside [`CoreError`] variants.
pub mod error_codes {
    pub const INVALID_PATTERN: &str = "RESPOND_CORE_PATTERN_INVALID";
    pub const NON_SCALAR_PATTERN: &str = "RESPOND_CORE_PATTERN_NON_SCALAR";
    pub const BODY_SERIALIZATION: &str = "RESPOND_CORE_BODY_SERIALIZATION";
}
