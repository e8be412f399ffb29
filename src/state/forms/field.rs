//! Form field value objects

/// Declared format for a field's value
///
/// `Any` fields only have the required/non-empty rule applied to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFormat {
    #[default]
    Any,
    /// Must look like an email address
    Email,
}

impl FieldFormat {
    /// Check a non-empty value against the declared format
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFormat::Any => true,
            FieldFormat::Email => value.contains('@'),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub format: FieldFormat,
    pub masked: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            format: FieldFormat::Any,
            masked: false,
        }
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            format: FieldFormat::Email,
            masked: false,
        }
    }

    /// Create a new password field (input is masked when rendered)
    pub fn password(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            format: FieldFormat::Any,
            masked: true,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Check whether the field has no input
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering (masked fields render bullets)
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
