pub mod group;
pub mod permission;
pub mod rules;
pub mod user;

use std::fmt::Display;

/// A field that failed its client-side rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors of a single form submission, in field order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn collect<I>(checks: I) -> Result<(), FormErrors>
    where
        I: IntoIterator<Item = Result<(), FieldError>>,
    {
        let errors = checks
            .into_iter()
            .filter_map(Result::err)
            .collect::<Vec<FieldError>>();
        if errors.is_empty() {
            return Ok(());
        }

        Err(FormErrors(errors))
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Maps raw form input onto the request shape of a single backend operation.
pub trait Form {
    type Command;

    fn validate(&self) -> Result<(), FormErrors>;

    /// Builds the command without validating the input.
    fn build(&self) -> Self::Command;

    fn to_command(&self) -> Result<Self::Command, FormErrors> {
        self.validate()?;
        Ok(self.build())
    }
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    match value.trim().is_empty() {
        true => None,
        false => Some(value.to_string()),
    }
}
