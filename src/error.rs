use thiserror::Error;

use crate::api::{OPTIONAL_DOCUMENTS, PRIMARY_DOCUMENT};

/// Failures that abort a dashboard load
#[derive(Debug, Error)]
pub enum LoadError {
    /// The predictions document is missing, unreachable or unparseable
    #[error("required document {path} could not be loaded: {reason}")]
    PrimaryUnavailable { path: &'static str, reason: String },
}

impl LoadError {
    pub fn primary(reason: impl ToString) -> Self {
        LoadError::PrimaryUnavailable {
            path: PRIMARY_DOCUMENT,
            reason: reason.to_string(),
        }
    }

    /// The documents the page can do without, for the error view
    pub fn optional_documents(&self) -> &'static [&'static str] {
        &OPTIONAL_DOCUMENTS
    }
}
