//! School registration record.

use serde::{Deserialize, Serialize};

/// A school registration row as the backend `schools` table expects it.
///
/// All string fields start empty and booleans false; latitude/longitude are
/// carried as text the way the form holds them. Once submitted the record is
/// never mutated or deleted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub name: String,
    /// Natural key linking staff and student records to this school.
    /// Uniqueness is a backend concern, not enforced here.
    pub emis_code: String,
    pub county: String,
    pub district: String,
    pub village: String,
    pub is_boarding: bool,
    pub is_urban: bool,
    pub phone: String,
    pub email: String,
    pub latitude: String,
    pub longitude: String,
    /// Public URL of the uploaded photo; empty when no photo was attached.
    #[serde(default)]
    pub photo_url: String,
}
