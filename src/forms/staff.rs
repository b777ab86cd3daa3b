//! Staff registration form.

use std::sync::Arc;

use crate::backend::Backend;
use crate::errors::FormError;
use crate::forms::{FormState, SubmitStatus};
use crate::models::StaffRecord;
use crate::notify::Notifier;

/// Controller for the staff registration form.
pub struct StaffForm {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    status: SubmitStatus,
}

impl StaffForm {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            state: FormState::new(
                &[
                    "surname",
                    "given_name",
                    "sex",
                    "phone",
                    "email",
                    "school_emis_code",
                ],
                &[],
            ),
            status: SubmitStatus::Idle,
        }
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.state.set_text(name, value);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Submit the form: one insert, notify, reset on success or preserve
    /// field values for retry on failure.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        self.status = SubmitStatus::Submitting;

        let record = StaffRecord {
            surname: self.state.text("surname").to_string(),
            given_name: self.state.text("given_name").to_string(),
            sex: self.state.text("sex").to_string(),
            phone: self.state.text("phone").to_string(),
            email: self.state.text("email").to_string(),
            school_emis_code: self.state.text("school_emis_code").to_string(),
        };

        match self.backend.insert_staff(&record).await {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                tracing::info!("Registered staff for school {}", record.school_emis_code);
                self.notifier.success("Staff registered successfully!");
                self.state.reset();
                Ok(())
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                tracing::error!("Staff insert failed: {}", e);
                self.notifier
                    .error(&format!("Failed to register staff: {}", e.message()));
                Err(e)
            }
        }
    }
}
