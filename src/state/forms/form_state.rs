//! Registration form state management

use super::field::{FieldId, FieldKind, FormField};

/// Trait for common form operations
pub trait Form {
    /// Number of focusable positions, including the submit row
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Immutable snapshot of the form values, the input to validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cep: String,
    pub logradouro: String,
    pub cidade: String,
    pub password: String,
    pub password_check: String,
}

/// The registration form: eight fields plus a submit row.
///
/// `logradouro` and `cidade` are derived fields, rendered but never part of
/// the focus cycle.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub cep: FormField,
    pub logradouro: FormField,
    pub cidade: FormField,
    pub password: FormField,
    pub password_check: FormField,
    pub active_field_index: usize,
}

/// Focus order over the editable fields; the submit row comes after
const FOCUS_ORDER: [FieldId; 6] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Cep,
    FieldId::Password,
    FieldId::PasswordCheck,
];

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldId::Name, "Nome", FieldKind::Text),
            email: FormField::new(FieldId::Email, "Email", FieldKind::Text),
            phone: FormField::new(FieldId::Phone, "Telefone", FieldKind::Phone),
            cep: FormField::new(FieldId::Cep, "CEP", FieldKind::Cep),
            logradouro: FormField::new(FieldId::Logradouro, "Logradouro", FieldKind::Derived),
            cidade: FormField::new(FieldId::Cidade, "Cidade", FieldKind::Derived),
            password: FormField::new(FieldId::Password, "Senha", FieldKind::Password),
            password_check: FormField::new(
                FieldId::PasswordCheck,
                "Confirmar senha",
                FieldKind::Password,
            ),
            active_field_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Cep => &self.cep,
            FieldId::Logradouro => &self.logradouro,
            FieldId::Cidade => &self.cidade,
            FieldId::Password => &self.password,
            FieldId::PasswordCheck => &self.password_check,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Cep => &mut self.cep,
            FieldId::Logradouro => &mut self.logradouro,
            FieldId::Cidade => &mut self.cidade,
            FieldId::Password => &mut self.password,
            FieldId::PasswordCheck => &mut self.password_check,
        }
    }

    /// The field id at a focus position, `None` on the submit row
    pub fn focused_field_id(&self) -> Option<FieldId> {
        FOCUS_ORDER.get(self.active_field_index).copied()
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == FOCUS_ORDER.len()
    }

    /// Whether a field receives focus when tabbing through the form
    #[allow(dead_code)] // exercised by the focus-cycle tests
    pub fn is_focusable(id: FieldId) -> bool {
        FOCUS_ORDER.contains(&id)
    }

    /// Snapshot the current values for validation and submission
    pub fn values(&self) -> RegistrationData {
        RegistrationData {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            cep: self.cep.as_text().to_string(),
            logradouro: self.logradouro.as_text().to_string(),
            cidade: self.cidade.as_text().to_string(),
            password: self.password.as_text().to_string(),
            password_check: self.password_check.as_text().to_string(),
        }
    }

    /// Clear every field and return focus to the first one
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FOCUS_ORDER.len() + 1 // editable fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FOCUS_ORDER.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = FOCUS_ORDER.get(self.active_field_index).copied()?;
        Some(self.field_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_starts_empty_at_first_field() {
        let form = RegistrationForm::new();
        assert_eq!(form.active_field_index, 0);
        for id in FieldId::ALL {
            assert!(form.field(id).is_empty());
        }
    }

    #[test]
    fn test_field_count_includes_submit_row() {
        let form = RegistrationForm::new();
        assert_eq!(form.field_count(), 7);
    }

    #[test]
    fn test_focus_skips_derived_fields() {
        let mut form = RegistrationForm::new();
        for _ in 0..form.field_count() {
            if let Some(id) = form.focused_field_id() {
                assert!(RegistrationForm::is_focusable(id));
                assert_ne!(id, FieldId::Logradouro);
                assert_ne!(id, FieldId::Cidade);
            }
            form.next_field();
        }
        assert!(!RegistrationForm::is_focusable(FieldId::Logradouro));
        assert!(!RegistrationForm::is_focusable(FieldId::Cidade));
    }

    #[test]
    fn test_next_field_wraps() {
        let mut form = RegistrationForm::new();
        for _ in 0..7 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_submit_row() {
        let mut form = RegistrationForm::new();
        form.prev_field();
        assert!(form.is_submit_row_active());
    }

    #[test]
    fn test_submit_row_has_no_active_field() {
        let mut form = RegistrationForm::new();
        form.set_active_field(6);
        assert!(form.is_submit_row_active());
        assert!(form.get_active_field_mut().is_none());
        assert!(form.focused_field_id().is_none());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = RegistrationForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, 6);
    }

    #[test]
    fn test_values_snapshot() {
        let mut form = RegistrationForm::new();
        form.name.set_text("Ana".to_string());
        form.cep.set_text("01310100".to_string());
        let data = form.values();
        assert_eq!(data.name, "Ana");
        assert_eq!(data.cep, "01310100");
        assert_eq!(data.email, "");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = RegistrationForm::new();
        form.name.set_text("Ana".to_string());
        form.logradouro.set_text("Avenida Paulista".to_string());
        form.set_active_field(3);
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.logradouro.is_empty());
        assert_eq!(form.active_field_index, 0);
    }
}
