//! Response envelope construction and query filter normalization for
//! document-backed HTTP backends.
//!
//! Two independent, side-effect-free components:
//!
//! - the envelope builder turns an outcome category plus options into a
//!   canonical response record, serialized either as a string-body
//!   gateway shape or as a structured record (`body_wrap` policy);
//! - the query normalizer sanitizes caller-supplied filter mappings and
//!   extracts a pagination descriptor before they reach a document query
//!   engine.
//!
//! Both are pure functions over their inputs and safe to call
//! concurrently without coordination.

pub mod api;
pub mod control;
pub mod envelope;
pub mod errors;
pub mod messages;
pub mod query;
