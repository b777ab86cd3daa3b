//! Student enrollment form.

use std::sync::Arc;

use crate::backend::Backend;
use crate::errors::FormError;
use crate::forms::{FormState, SubmitStatus};
use crate::models::StudentRecord;
use crate::notify::Notifier;

/// Controller for the student enrollment form.
pub struct StudentForm {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    state: FormState,
    status: SubmitStatus,
}

impl StudentForm {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            state: FormState::new(
                &[
                    "surname",
                    "given_name",
                    "sex",
                    "date_of_birth",
                    "grade",
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

        let record = StudentRecord {
            surname: self.state.text("surname").to_string(),
            given_name: self.state.text("given_name").to_string(),
            sex: self.state.text("sex").to_string(),
            date_of_birth: self.state.text("date_of_birth").to_string(),
            grade: self.state.text("grade").to_string(),
            school_emis_code: self.state.text("school_emis_code").to_string(),
        };

        match self.backend.insert_student(&record).await {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                tracing::info!("Enrolled student at school {}", record.school_emis_code);
                self.notifier.success("Student registered successfully!");
                self.state.reset();
                Ok(())
            }
            Err(e) => {
                self.status = SubmitStatus::Failed;
                tracing::error!("Student insert failed: {}", e);
                self.notifier
                    .error(&format!("Failed to register student: {}", e.message()));
                Err(e)
            }
        }
    }
}
