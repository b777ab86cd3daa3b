//! Student enrollment record.

use serde::{Deserialize, Serialize};

/// A student enrollment row as the backend `students` table expects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub surname: String,
    pub given_name: String,
    pub sex: String,
    /// ISO date string as the date input produces it.
    pub date_of_birth: String,
    pub grade: String,
    /// Reference to `SchoolRecord::emis_code`; not enforced locally.
    pub school_emis_code: String,
}
