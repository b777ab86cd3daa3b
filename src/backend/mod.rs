//! Backend client module.
//!
//! The hosted platform is reached through the [`Backend`] trait so every
//! form takes an explicitly constructed, injected client instance instead of
//! a module-level singleton. Tests substitute a fake; [`RestBackend`] is the
//! production implementation.

mod rest;

pub use rest::*;

use async_trait::async_trait;

use crate::errors::FormError;
use crate::models::{Location, SchoolRecord, StaffRecord, StudentRecord};

/// Client for the hosted database and object storage.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Read the full location reference list.
    async fn fetch_locations(&self) -> Result<Vec<Location>, FormError>;

    /// Insert one row into the `schools` table.
    async fn insert_school(&self, record: &SchoolRecord) -> Result<(), FormError>;

    /// Insert one row into the `staff` table.
    async fn insert_staff(&self, record: &StaffRecord) -> Result<(), FormError>;

    /// Insert one row into the `students` table.
    async fn insert_student(&self, record: &StudentRecord) -> Result<(), FormError>;

    /// Upload photo bytes under `path` and resolve their public URL.
    async fn upload_photo(&self, path: &str, bytes: Vec<u8>) -> Result<String, FormError>;
}
