use serde::Serialize;

// ── Error types ────────────────────────────────────────────

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending value, e.g. `settings[2]` or `value` for the root.
    pub field: String,
    pub message: String,
    /// One of `required`, `type`, `null`, `format`.
    pub code: String,
}

impl FieldError {
    pub(crate) fn new(field: &str, code: &str, message: String) -> Self {
        Self {
            field: if field.is_empty() {
                "value".to_string()
            } else {
                field.to_string()
            },
            message,
            code: code.to_string(),
        }
    }
}

/// Every error found in one record, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Errors reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed")?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
