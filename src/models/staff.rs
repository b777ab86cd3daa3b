//! Staff registration record.

use serde::{Deserialize, Serialize};

/// Sex as the backend stores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// The option list a host renders into the sex dropdown.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Sex::Male),
            "Female" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// A staff registration row as the backend `staff` table expects it.
///
/// Sex is carried as the raw dropdown value; `Sex` names the valid options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub surname: String,
    pub given_name: String,
    pub sex: String,
    pub phone: String,
    pub email: String,
    /// Reference to `SchoolRecord::emis_code`; not enforced locally.
    pub school_emis_code: String,
}
