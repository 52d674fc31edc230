//! Client-side validation rules for form values
//!
//! Forms are validated before they reach the network; a non-empty
//! [`FieldErrors`] blocks submission.

/// Validation rules for a single field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Empty rules (optional field, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Rules for a required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(format!("{} is required", field_label))
            } else {
                Ok(())
            };
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate an optional numeric value; `None` only passes when not required.
    pub fn validate_optional_number(
        &self,
        value: Option<f64>,
        field_label: &str,
    ) -> Result<(), String> {
        match value {
            Some(v) => self.validate_number(v, field_label),
            None if self.required => Err(format!("{} is required", field_label)),
            None => Ok(()),
        }
    }

    /// Validate a select bound to a numeric id. Ids start at 1.
    pub fn validate_selection(&self, value: Option<i64>, field_label: &str) -> Result<(), String> {
        match value {
            Some(id) if id >= 1 => Ok(()),
            _ if self.required => Err(format!("Please select {}", field_label)),
            _ => Ok(()),
        }
    }
}

/// Ordered list of field-level validation messages.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{}", self.summary())]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one rule check against `field`.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.push(field, message);
        }
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        // first message per field wins
        if self.get(field).is_none() {
            self.errors.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// All messages joined for a single-line notification.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|(_, m)| m.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Rules shared by the name/description master-data forms.
pub const NAME_RULES: ValidationRules = ValidationRules::required().with_min_length(2);
pub const DESCRIPTION_RULES: ValidationRules = ValidationRules::required().with_min_length(5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Name").is_err());
        assert!(rules.validate_string("x", "Name").is_ok());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert_eq!(
            NAME_RULES.validate_string("a", "Name"),
            Err("Name must be at least 2 characters".to_string())
        );
        assert!(NAME_RULES.validate_string("ék", "Name").is_ok());
        assert!(DESCRIPTION_RULES.validate_string("four", "Description").is_err());
    }

    #[test]
    fn test_number_range() {
        let pct = ValidationRules::none().with_min(0.0).with_max(100.0);
        assert!(pct.validate_number(0.0, "Feed %").is_ok());
        assert!(pct.validate_number(100.0, "Feed %").is_ok());
        assert!(pct.validate_number(100.5, "Feed %").is_err());
        assert!(pct.validate_number(-1.0, "Feed %").is_err());
        assert!(pct.validate_number(f64::NAN, "Feed %").is_err());
    }

    #[test]
    fn test_selection() {
        let rules = ValidationRules::required();
        assert!(rules.validate_selection(None, "family").is_err());
        assert!(rules.validate_selection(Some(0), "family").is_err());
        assert!(rules.validate_selection(Some(3), "family").is_ok());
        assert!(ValidationRules::none().validate_selection(None, "family").is_ok());
    }

    #[test]
    fn test_field_errors_keep_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.check("name", Err("first".into()));
        errors.check("name", Err("second".into()));
        errors.check("description", Ok(()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("first"));
        assert!(errors.into_result().is_err());
    }
}
