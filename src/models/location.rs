//! Location reference rows used to populate the county/district dropdowns.

use serde::{Deserialize, Serialize};

/// A county/district lookup row, owned entirely by the backend `locations`
/// table. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub county: String,
    pub district: String,
}

impl Location {
    pub fn new(county: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            district: district.into(),
        }
    }
}
