//! Form Validation
//!
//! Required-field checks for the registration and contact forms, and
//! conversion of the filled form into the flat map the backend expects.

use crate::api::FormData;

/// Border colour of a required field left empty
pub const INVALID_BORDER: &str = "#dc2626";

/// Border colour of a field that passed validation
pub const VALID_BORDER: &str = "#ddd";

/// Alert shown when validation fails
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    /// `type` attribute for `<input>` fields
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }
}

/// One input of a form and its validation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub invalid: bool,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            required: false,
            invalid: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn border_color(&self) -> &'static str {
        if self.invalid {
            INVALID_BORDER
        } else {
            VALID_BORDER
        }
    }
}

/// Mark every required field that is blank, clear the mark on all others.
///
/// Returns `true` when no required field is blank. Optional fields are never
/// marked.
pub fn validate_form(fields: &mut [FormField]) -> bool {
    let mut valid = true;

    for field in fields.iter_mut() {
        field.invalid = field.required && field.is_blank();
        if field.invalid {
            valid = false;
        }
    }

    valid
}

/// Field name to value, as submitted
pub fn collect(fields: &[FormField]) -> FormData {
    fields
        .iter()
        .map(|f| (f.name.clone(), f.value.clone()))
        .collect()
}

/// Empty every value and drop validation marks
pub fn reset(fields: &mut [FormField]) {
    for field in fields.iter_mut() {
        field.value.clear();
        field.invalid = false;
    }
}

/// Look up a field by name for editing
pub fn field_mut<'a>(fields: &'a mut [FormField], name: &str) -> Option<&'a mut FormField> {
    fields.iter_mut().find(|f| f.name == name)
}

/// Student registration form
pub fn registration_form() -> Vec<FormField> {
    vec![
        FormField::new("full_name", "Full Name", FieldKind::Text).required(),
        FormField::new("email", "Email", FieldKind::Email).required(),
        FormField::new("phone", "Phone", FieldKind::Tel),
        FormField::new("course", "Course", FieldKind::Text).required(),
        FormField::new("message", "Message", FieldKind::TextArea),
    ]
}

/// Contact inquiry form
pub fn contact_form() -> Vec<FormField> {
    vec![
        FormField::new("name", "Name", FieldKind::Text).required(),
        FormField::new("email", "Email", FieldKind::Email).required(),
        FormField::new("phone", "Phone", FieldKind::Tel),
        FormField::new("subject", "Subject", FieldKind::Text),
        FormField::new("message", "Message", FieldKind::TextArea).required(),
    ]
}
