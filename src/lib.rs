//! EMIS Registration Forms
//!
//! Form workflows for school, staff, and student registration against a
//! hosted relational backend and object storage. The crate owns everything
//! below the rendering layer: typed records, form state, dependent
//! reference-data derivation, geolocation capture, the submission flow, and
//! the backend client. Rendering, toast display, and routing stay in the
//! host application, which drives the form controllers exposed here.

pub mod backend;
pub mod config;
pub mod errors;
pub mod forms;
pub mod geo;
pub mod models;
pub mod notify;
pub mod reference;

pub use backend::{Backend, RestBackend};
pub use config::Config;
pub use errors::FormError;
pub use forms::{SchoolForm, StaffForm, StudentForm, SubmitStatus};
pub use notify::Notifier;
