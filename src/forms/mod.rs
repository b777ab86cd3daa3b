//! Form state and the submission lifecycle shared by all three forms.

mod school;
mod staff;
mod student;

pub use school::*;
pub use staff::*;
pub use student::*;

/// A single form field value: free text or a checkbox flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Text(_) => false,
            FieldValue::Flag(b) => *b,
        }
    }
}

/// Mapping of field name to current value for one form.
///
/// Fields initialize to empty text or false and return to those values on
/// [`FormState::reset`]. One special rule from the dependent dropdowns:
/// setting `county` unconditionally clears `district`, even when the county
/// did not change.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<(String, FieldValue)>,
}

impl FormState {
    pub fn new(text_fields: &[&str], flag_fields: &[&str]) -> Self {
        let mut fields: Vec<(String, FieldValue)> = text_fields
            .iter()
            .map(|name| (name.to_string(), FieldValue::Text(String::new())))
            .collect();
        fields.extend(
            flag_fields
                .iter()
                .map(|name| (name.to_string(), FieldValue::Flag(false))),
        );
        Self { fields }
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Store a text edit. Editing `county` clears `district`.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, FieldValue::Text(value.into()));
        if name == "county" {
            self.set("district", FieldValue::Text(String::new()));
        }
    }

    /// Store a checkbox toggle.
    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.set(name, FieldValue::Flag(value));
    }

    pub fn text(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_text())
            .unwrap_or("")
    }

    pub fn flag(&self, name: &str) -> bool {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_flag())
            .unwrap_or(false)
    }

    /// Return every field to its initial empty/false value.
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            *value = match value {
                FieldValue::Text(_) => FieldValue::Text(String::new()),
                FieldValue::Flag(_) => FieldValue::Flag(false),
            };
        }
    }
}

/// Submission lifecycle of one form.
///
/// Idle until the user submits; `Submitting` spans the optional upload and
/// the insert, the only suspend point. Success resets the form, failure
/// preserves it for retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school_like_state() -> FormState {
        FormState::new(
            &["name", "county", "district", "phone"],
            &["is_boarding", "is_urban"],
        )
    }

    #[test]
    fn test_fields_initialize_empty() {
        let state = school_like_state();
        assert_eq!(state.text("name"), "");
        assert!(!state.flag("is_boarding"));
    }

    #[test]
    fn test_set_county_clears_district() {
        let mut state = school_like_state();
        state.set_text("county", "A");
        state.set_text("district", "X");
        assert_eq!(state.text("district"), "X");

        // Re-selecting the same county still clears the district.
        state.set_text("county", "A");
        assert_eq!(state.text("county"), "A");
        assert_eq!(state.text("district"), "");
    }

    #[test]
    fn test_toggle_flag_twice_restores_it() {
        let mut state = school_like_state();
        state.set_text("name", "Hillside Primary");
        state.set_flag("is_urban", true);
        state.set_flag("is_urban", false);
        assert!(!state.flag("is_urban"));
        assert_eq!(state.text("name"), "Hillside Primary");
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = school_like_state();
        state.set_text("name", "Hillside Primary");
        state.set_text("phone", "0700000000");
        state.set_flag("is_boarding", true);

        state.reset();

        assert_eq!(state.text("name"), "");
        assert_eq!(state.text("phone"), "");
        assert!(!state.flag("is_boarding"));
    }
}
