//! Optional second-opinion consultation of an external advisory
//! service. The advisory path is strictly non-blocking for triage:
//! every failure here degrades to the rule-based draft result, and an
//! opinion can only add to that draft, never soften it.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Advisory service is not reachable at {0}")]
    Unreachable(String),

    #[error("Advisory request timed out after {0}s")]
    Timeout(u64),

    #[error("Advisory service returned error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed advisory response: {0}")]
    MalformedResponse(String),
}
