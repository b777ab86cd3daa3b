//! Error handling module for the EMIS forms crate.
//!
//! Provides a centralized error type with stable codes. Every failure is
//! local to one load or submission attempt and recoverable by user retry;
//! nothing here is fatal to the host process.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const REFERENCE_DATA_ERROR: &str = "REFERENCE_DATA_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const BACKEND_ERROR: &str = "BACKEND_ERROR";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const JSON_ERROR: &str = "JSON_ERROR";
}

/// Form workflow error type.
#[derive(Debug)]
pub enum FormError {
    /// Location reference-data fetch failed; dropdowns stay empty
    ReferenceData(String),
    /// Object-storage upload failed; the insert is never attempted
    Storage(String),
    /// The backend rejected or failed an insert
    Backend(String),
    /// Transport-level HTTP failure
    Http(String),
    /// Payload (de)serialization failure
    Json(String),
}

impl FormError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::ReferenceData(_) => codes::REFERENCE_DATA_ERROR,
            FormError::Storage(_) => codes::STORAGE_ERROR,
            FormError::Backend(_) => codes::BACKEND_ERROR,
            FormError::Http(_) => codes::HTTP_ERROR,
            FormError::Json(_) => codes::JSON_ERROR,
        }
    }

    /// Get the error message, opaque text from the external platform in the
    /// backend and storage cases.
    pub fn message(&self) -> &str {
        match self {
            FormError::ReferenceData(msg) => msg,
            FormError::Storage(msg) => msg,
            FormError::Backend(msg) => msg,
            FormError::Http(msg) => msg,
            FormError::Json(msg) => msg,
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for FormError {}

impl From<reqwest::Error> for FormError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        FormError::Http(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        FormError::Json(format!("JSON error: {}", err))
    }
}
