//! School registration form.
//!
//! The largest of the three forms: on top of the shared submission pattern
//! it loads the county/district reference data, captures a one-shot device
//! position, and optionally uploads a photo before the insert.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::backend::Backend;
use crate::errors::FormError;
use crate::forms::{FormState, SubmitStatus};
use crate::geo::PositionSource;
use crate::models::SchoolRecord;
use crate::notify::Notifier;
use crate::reference::ReferenceData;

/// A photo chosen by the user, held until submission.
#[derive(Debug, Clone)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Controller for the school registration form.
pub struct SchoolForm {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    reference: ReferenceData,
    photo: Option<PhotoAttachment>,
    status: SubmitStatus,
}

impl SchoolForm {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            state: FormState::new(
                &[
                    "name",
                    "emis_code",
                    "county",
                    "district",
                    "village",
                    "phone",
                    "email",
                    "latitude",
                    "longitude",
                ],
                &["is_boarding", "is_urban"],
            ),
            reference: ReferenceData::default(),
            photo: None,
            status: SubmitStatus::Idle,
        }
    }

    /// One-shot load of the location reference list.
    ///
    /// On failure the dropdowns stay empty and the error is surfaced through
    /// the notifier so the user knows why.
    pub async fn load_reference_data(&mut self) -> Result<(), FormError> {
        match self.backend.fetch_locations().await {
            Ok(locations) => {
                tracing::info!("Loaded {} location rows", locations.len());
                self.reference = ReferenceData::new(locations);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Location load failed: {}", e);
                self.notifier
                    .error(&format!("Failed to load locations: {}", e.message()));
                Err(e)
            }
        }
    }

    /// One-shot position capture. Missing capability or a failed read leaves
    /// the coordinate fields empty; submission proceeds without them.
    pub fn capture_position(&mut self, source: &dyn PositionSource) {
        if let Some(position) = source.current_position() {
            self.state.set_text("latitude", position.latitude.to_string());
            self.state
                .set_text("longitude", position.longitude.to_string());
        }
    }

    /// Dropdown options: distinct counties in first-seen order.
    pub fn counties(&self) -> Vec<&str> {
        self.reference.counties()
    }

    /// Dropdown options: districts of the currently selected county.
    pub fn districts(&self) -> Vec<&str> {
        self.reference.districts_for(self.state.text("county"))
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.state.set_text(name, value);
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.state.set_flag(name, value);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn attach_photo(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.photo = Some(PhotoAttachment {
            file_name: file_name.into(),
            bytes,
        });
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }

    /// Submit the form: upload the photo if one is attached, then insert the
    /// record. A failed upload aborts before the insert; a failed insert
    /// leaves all field values intact for retry. Success resets the form and
    /// clears the attachment.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        self.status = SubmitStatus::Submitting;

        let mut photo_url = String::new();
        if let Some(photo) = &self.photo {
            let path = photo_object_path(self.state.text("name"), &photo.file_name);
            match self.backend.upload_photo(&path, photo.bytes.clone()).await {
                Ok(url) => {
                    tracing::info!("Uploaded school photo to {}", path);
                    photo_url = url;
                }
                Err(e) => {
                    self.status = SubmitStatus::Failed;
                    tracing::error!("Photo upload failed: {}", e);
                    self.notifier
                        .error(&format!("Failed to upload photo: {}", e.message()));
                    return Err(e);
                }
            }
        }

        let record = SchoolRecord {
            name: self.state.text("name").to_string(),
            emis_code: self.state.text("emis_code").to_string(),
            county: self.state.text("county").to_string(),
            district: self.state.text("district").to_string(),
            village: self.state.text("village").to_string(),
            is_boarding: self.state.flag("is_boarding"),
            is_urban: self.state.flag("is_urban"),
            phone: self.state.text("phone").to_string(),
            email: self.state.text("email").to_string(),
            latitude: self.state.text("latitude").to_string(),
            longitude: self.state.text("longitude").to_string(),
            photo_url,
        };

        match self.backend.insert_school(&record).await {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                tracing::info!("Registered school {}", record.emis_code);
                self.notifier.success("School registered successfully!");
                self.state.reset();
                self.photo = None;
                Ok(())
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                tracing::error!("School insert failed: {}", e);
                self.notifier
                    .error(&format!("Failed to register school: {}", e.message()));
                Err(e)
            }
        }
    }
}

/// Object path for an uploaded photo: sanitized school name, epoch millis,
/// original extension (`bin` when the file name has none).
pub(crate) fn photo_object_path(school_name: &str, file_name: &str) -> String {
    let sanitized = school_name.to_lowercase().replace(' ', "_");
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    format!("{}_{}.{}", sanitized, Utc::now().timestamp_millis(), extension)
}
