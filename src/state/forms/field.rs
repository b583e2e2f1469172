//! Form field value objects

use crate::phone::MASKED_PHONE_WIDTH;

/// Identifies each field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Cep,
    Logradouro,
    Cidade,
    Password,
    PasswordCheck,
}

impl FieldId {
    /// All fields, in validation order
    pub const ALL: [FieldId; 8] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::PasswordCheck,
        FieldId::Phone,
        FieldId::Cep,
        FieldId::Logradouro,
        FieldId::Cidade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Cep => "cep",
            FieldId::Logradouro => "logradouro",
            FieldId::Cidade => "cidade",
            FieldId::Password => "password",
            FieldId::PasswordCheck => "password_check",
        }
    }
}

/// How a field accepts and displays input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered masked with bullets
    Password,
    /// Input is re-masked by the phone normalizer after every edit
    Phone,
    /// Capped at 8 characters, the length of a CEP
    Cep,
    /// Written only by the CEP resolver, never editable
    Derived,
}

/// A single form field with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    pub fn new(id: FieldId, label: &str, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.to_string(),
            kind,
            value: String::new(),
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value wholesale
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a character, honoring per-kind input caps
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Cep => {
                if self.value.chars().count() < 8 {
                    self.value.push(c);
                }
            }
            FieldKind::Phone => {
                if self.value.chars().count() < MASKED_PHONE_WIDTH {
                    self.value.push(c);
                }
            }
            FieldKind::Derived => {
                // Derived fields only change through the resolver
            }
            FieldKind::Text | FieldKind::Password => self.value.push(c),
        }
    }

    /// Remove the last character
    pub fn pop_char(&mut self) {
        if self.kind != FieldKind::Derived {
            self.value.pop();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_accepts_any_chars() {
        let mut field = FormField::new(FieldId::Name, "Nome", FieldKind::Text);
        for c in "José".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "José");
        assert_eq!(field.display_value(), "José");
    }

    #[test]
    fn test_password_field_displays_bullets() {
        let mut field = FormField::new(FieldId::Password, "Senha", FieldKind::Password);
        for c in "abc".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "abc");
        assert_eq!(field.display_value(), "•••");
    }

    #[test]
    fn test_cep_field_caps_at_eight_chars() {
        let mut field = FormField::new(FieldId::Cep, "CEP", FieldKind::Cep);
        for c in "0131010099".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "01310100");
    }

    #[test]
    fn test_derived_field_ignores_keystrokes() {
        let mut field = FormField::new(FieldId::Cidade, "Cidade", FieldKind::Derived);
        field.push_char('x');
        assert_eq!(field.as_text(), "");
        field.set_text("São Paulo".to_string());
        field.pop_char();
        assert_eq!(field.as_text(), "São Paulo");
    }

    #[test]
    fn test_pop_and_clear() {
        let mut field = FormField::new(FieldId::Email, "Email", FieldKind::Text);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        field.clear();
        assert!(field.is_empty());
    }
}
