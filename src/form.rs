//! Contact-form validation.
//!
//! Values are trimmed before any rule runs. A single field is validated on
//! blur, typing into a field clears its error, and submit validates every
//! field at once and reports the first invalid one for focus.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Document order, which is also focus order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The control's `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

/// One failed rule. The display text is shown inline under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter your email")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter a message")]
    MessageMissing,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            FieldError::NameMissing | FieldError::NameTooShort => Field::Name,
            FieldError::EmailMissing | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageMissing | FieldError::MessageTooShort => Field::Message,
        }
    }
}

/// Every failed field from one submit, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} contact form field(s) invalid", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().copied()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.iter().find(|e| e.field() == field)
    }

    /// The field that should receive focus.
    #[must_use]
    pub fn first_invalid(&self) -> Option<Field> {
        self.errors.first().map(|e| e.field())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Validate one raw field value.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    match field {
        Field::Name if value.is_empty() => Err(FieldError::NameMissing),
        Field::Name if value.chars().count() < NAME_MIN_CHARS => Err(FieldError::NameTooShort),
        Field::Email if value.is_empty() => Err(FieldError::EmailMissing),
        Field::Email if !is_valid_email(value) => Err(FieldError::EmailInvalid),
        Field::Message if value.is_empty() => Err(FieldError::MessageMissing),
        Field::Message if value.chars().count() < MESSAGE_MIN_CHARS => Err(FieldError::MessageTooShort),
        _ => Ok(()),
    }
}

/// Validate every field. On success returns the trimmed form.
pub fn validate(form: &ContactForm) -> Result<ContactForm, ValidationErrors> {
    let errors: Vec<FieldError> = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, form.get(field)).err())
        .collect();
    if errors.is_empty() { Ok(form.trimmed()) } else { Err(ValidationErrors { errors }) }
}

/// `local@domain.tld` shape: one `@`, both sides non-empty, no whitespace,
/// and a dot inside the domain.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let parts = email.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return false;
    }
    let domain = parts[1];
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Inline error state shown next to each field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    shown: [Option<FieldError>; 3],
}

impl FormErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.shown[field.index()]
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.shown.iter().any(Option::is_some)
    }

    /// Field lost focus: validate it alone.
    pub fn on_blur(&mut self, field: Field, raw: &str) -> Option<FieldError> {
        let error = validate_field(field, raw).err();
        self.shown[field.index()] = error;
        error
    }

    /// Field edited: clear its error. Returns true when one was shown.
    pub fn on_input(&mut self, field: Field) -> bool {
        self.shown[field.index()].take().is_some()
    }

    /// Submit: validate everything and show every error. On failure returns
    /// the field to focus.
    pub fn on_submit(&mut self, form: &ContactForm) -> Result<ContactForm, Field> {
        match validate(form) {
            Ok(clean) => {
                self.clear();
                Ok(clean)
            }
            Err(errors) => {
                for field in Field::ALL {
                    self.shown[field.index()] = errors.get(field);
                }
                tracing::debug!(invalid = errors.len(), "contact form rejected");
                // `validate` only fails with at least one error.
                Err(errors.first_invalid().unwrap_or(Field::Name))
            }
        }
    }

    pub fn clear(&mut self) {
        self.shown = [None; 3];
    }
}
