//! Declarative field validation for the registration form
//!
//! Each field owns an ordered list of pure predicate+message rules; the first
//! failing rule supplies that field's error message. Validation is a
//! deterministic function of the form snapshot with no side effects.

use crate::phone::is_valid_phone;
use crate::state::{FieldId, RegistrationData};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A CEP is exactly 8 decimal digits
pub static CEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("valid cep regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// User-facing validation messages
pub mod messages {
    pub const NAME_REQUIRED: &str = "Nome é obrigatório";
    pub const NAME_TOO_SHORT: &str = "Necessário pelo menos 2 caracteres";
    pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
    pub const EMAIL_INVALID: &str = "Email inválido";
    pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
    pub const PASSWORD_TOO_SHORT: &str = "Necessário pelo menos 2 caracteres";
    pub const PASSWORD_CHECK_REQUIRED: &str = "Confirmação de senha é obrigatória";
    pub const PASSWORD_MISMATCH: &str = "Senhas não coincidem";
    pub const PHONE_INVALID: &str = "Telefone inválido";
    pub const CEP_REQUIRED: &str = "CEP é obrigatório";
    pub const CEP_INVALID: &str = "Formato de CEP inválido";
    pub const LOGRADOURO_REQUIRED: &str = "Logradouro é obrigatório";
    pub const CIDADE_REQUIRED: &str = "Cidade é obrigatório";
}

/// One validation rule: passes when `check` returns true
struct Rule {
    check: fn(&RegistrationData) -> bool,
    message: &'static str,
}

fn name_present(d: &RegistrationData) -> bool {
    !d.name.is_empty()
}
fn name_min_len(d: &RegistrationData) -> bool {
    d.name.chars().count() >= 2
}
fn email_present(d: &RegistrationData) -> bool {
    !d.email.is_empty()
}
fn email_well_formed(d: &RegistrationData) -> bool {
    EMAIL_RE.is_match(&d.email)
}
fn password_present(d: &RegistrationData) -> bool {
    !d.password.is_empty()
}
fn password_min_len(d: &RegistrationData) -> bool {
    d.password.chars().count() >= 2
}
fn password_check_present(d: &RegistrationData) -> bool {
    !d.password_check.is_empty()
}
fn passwords_match(d: &RegistrationData) -> bool {
    d.password_check == d.password
}
fn phone_ok_if_present(d: &RegistrationData) -> bool {
    d.phone.is_empty() || is_valid_phone(&d.phone)
}
fn cep_present(d: &RegistrationData) -> bool {
    !d.cep.is_empty()
}
fn cep_well_formed(d: &RegistrationData) -> bool {
    CEP_RE.is_match(&d.cep)
}
fn logradouro_present(d: &RegistrationData) -> bool {
    !d.logradouro.is_empty()
}
fn cidade_present(d: &RegistrationData) -> bool {
    !d.cidade.is_empty()
}

const NAME_RULES: [Rule; 2] = [
    Rule {
        check: name_present,
        message: messages::NAME_REQUIRED,
    },
    Rule {
        check: name_min_len,
        message: messages::NAME_TOO_SHORT,
    },
];
const EMAIL_RULES: [Rule; 2] = [
    Rule {
        check: email_present,
        message: messages::EMAIL_REQUIRED,
    },
    Rule {
        check: email_well_formed,
        message: messages::EMAIL_INVALID,
    },
];
const PASSWORD_RULES: [Rule; 2] = [
    Rule {
        check: password_present,
        message: messages::PASSWORD_REQUIRED,
    },
    Rule {
        check: password_min_len,
        message: messages::PASSWORD_TOO_SHORT,
    },
];
const PASSWORD_CHECK_RULES: [Rule; 2] = [
    Rule {
        check: password_check_present,
        message: messages::PASSWORD_CHECK_REQUIRED,
    },
    Rule {
        check: passwords_match,
        message: messages::PASSWORD_MISMATCH,
    },
];
const PHONE_RULES: [Rule; 1] = [Rule {
    check: phone_ok_if_present,
    message: messages::PHONE_INVALID,
}];
const CEP_RULES: [Rule; 2] = [
    Rule {
        check: cep_present,
        message: messages::CEP_REQUIRED,
    },
    Rule {
        check: cep_well_formed,
        message: messages::CEP_INVALID,
    },
];
const LOGRADOURO_RULES: [Rule; 1] = [Rule {
    check: logradouro_present,
    message: messages::LOGRADOURO_REQUIRED,
}];
const CIDADE_RULES: [Rule; 1] = [Rule {
    check: cidade_present,
    message: messages::CIDADE_REQUIRED,
}];

/// The rules for one field, in order of semantic precedence
fn field_rules(id: FieldId) -> &'static [Rule] {
    match id {
        FieldId::Name => &NAME_RULES,
        FieldId::Email => &EMAIL_RULES,
        FieldId::Password => &PASSWORD_RULES,
        FieldId::PasswordCheck => &PASSWORD_CHECK_RULES,
        FieldId::Phone => &PHONE_RULES,
        FieldId::Cep => &CEP_RULES,
        FieldId::Logradouro => &LOGRADOURO_RULES,
        FieldId::Cidade => &CIDADE_RULES,
    }
}

/// First violated rule's message for a single field, if any
pub fn first_error(id: FieldId, data: &RegistrationData) -> Option<&'static str> {
    field_rules(id)
        .iter()
        .find(|r| !(r.check)(data))
        .map(|r| r.message)
}

/// Validate the full form. Empty map means valid.
pub fn validate(data: &RegistrationData) -> BTreeMap<FieldId, &'static str> {
    FieldId::ALL
        .iter()
        .filter_map(|&id| first_error(id, data).map(|msg| (id, msg)))
        .collect()
}
