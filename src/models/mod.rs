//! Data models for the EMIS registration forms.
//!
//! Records are flat property bags whose field names match the backend table
//! columns exactly; they serialize 1:1 into insert payloads.

mod location;
mod school;
mod staff;
mod student;

pub use location::*;
pub use school::*;
pub use staff::*;
pub use student::*;
