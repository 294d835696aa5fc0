//! Validation of submitted form values
//!
//! Item text is free-form: the only rule is that the field was submitted.
//! Empty strings are kept as-is.

use std::fmt;

/// Validation error for submitted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required form field was not submitted
    Missing { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Name of the form field carrying item text
pub const ITEM_TEXT_FIELD: &str = "item_text";

/// Text of a new item, as submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText(String);

impl ItemText {
    /// Accept any submitted text, including the empty string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build from an optional form value, failing only when the field is absent.
    ///
    /// # Example
    /// ```
    /// use superlists_core::ItemText;
    ///
    /// assert!(ItemText::from_field(Some("buy milk".into())).is_ok());
    /// assert!(ItemText::from_field(Some(String::new())).is_ok());
    /// assert!(ItemText::from_field(None).is_err());
    /// ```
    pub fn from_field(value: Option<String>) -> Result<Self, ValidationError> {
        value.map(Self).ok_or(ValidationError::Missing {
            field: ITEM_TEXT_FIELD,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message() {
        let err = ItemText::from_field(None).unwrap_err();
        assert_eq!(err.to_string(), "item_text is required");
    }

    #[test]
    fn keeps_text_verbatim() {
        let text = ItemText::from_field(Some("  <b>eggs</b> & ham ".into())).unwrap();
        assert_eq!(text.as_str(), "  <b>eggs</b> & ham ");
    }

    #[test]
    fn empty_is_accepted() {
        let text = ItemText::from_field(Some(String::new())).unwrap();
        assert_eq!(text.into_string(), "");
    }
}
