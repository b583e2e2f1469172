//! Application state and core logic

use crate::cep::{Address, CepResolver, LookupError};
use crate::phone::normalize_phone;
use crate::state::{FieldId, Form, RegistrationForm};
use crate::validation::{self, CEP_RE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Notice shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Conta criada com sucesso";

/// A settled CEP lookup, tagged with the code it was issued for
#[derive(Debug)]
pub struct LookupResult {
    pub cep: String,
    pub outcome: Result<Address, LookupError>,
}

/// Main application struct
pub struct App {
    /// The registration form and its focus state
    pub form: RegistrationForm,
    /// Per-field validation errors from the last submit attempt
    pub errors: BTreeMap<FieldId, &'static str>,
    /// Inline CEP lookup error, independent of schema validation
    pub error_cep: Option<String>,
    /// Success notice after a valid submission
    pub notice: Option<String>,
    /// Resolver for CEP address lookups
    resolver: Arc<dyn CepResolver>,
    /// Channel joining spawned lookup tasks back into the event loop
    lookup_tx: mpsc::UnboundedSender<LookupResult>,
    lookup_rx: mpsc::UnboundedReceiver<LookupResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance around a CEP resolver
    pub fn new(resolver: Arc<dyn CepResolver>) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        Self {
            form: RegistrationForm::new(),
            errors: BTreeMap::new(),
            error_cep: None,
            notice: None,
            resolver,
            lookup_tx,
            lookup_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The first error to display under a field.
    ///
    /// For the CEP field the lookup error takes priority over the schema
    /// message, matching how the form surfaces `errorCep`.
    pub fn field_error(&self, id: FieldId) -> Option<&str> {
        if id == FieldId::Cep {
            if let Some(msg) = &self.error_cep {
                return Some(msg);
            }
        }
        self.errors.get(&id).copied()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => {
                if self.form.is_submit_row_active() {
                    self.submit();
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.get_active_field_mut() {
                    let id = field.id;
                    let before = field.as_text().to_string();
                    field.pop_char();
                    if field.as_text() != before {
                        self.after_edit(id);
                    }
                }
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                if let Some(field) = self.form.get_active_field_mut() {
                    let id = field.id;
                    let before = field.as_text().to_string();
                    field.push_char(c);
                    if field.as_text() != before {
                        self.after_edit(id);
                    }
                }
            }
            _ => {}
        }
    }

    /// Reactive effect run whenever a watched field's value changes: re-mask
    /// the phone field and dispatch the CEP lookup when the code is complete.
    fn after_edit(&mut self, id: FieldId) {
        self.notice = None;
        match id {
            FieldId::Phone => {
                let masked = normalize_phone(self.form.phone.as_text());
                self.form.phone.set_text(masked);
            }
            FieldId::Cep => self.schedule_cep_lookup(),
            _ => {}
        }
    }

    /// Spawn a lookup for the current CEP value if it is exactly 8 digits;
    /// any other content clears the prior lookup error and does nothing.
    fn schedule_cep_lookup(&mut self) {
        let cep = self.form.cep.as_text().to_string();
        if !CEP_RE.is_match(&cep) {
            self.error_cep = None;
            return;
        }
        let resolver = Arc::clone(&self.resolver);
        let tx = self.lookup_tx.clone();
        tokio::spawn(async move {
            let outcome = resolver.lookup(&cep).await;
            // Receiver dropped means the app is shutting down
            let _ = tx.send(LookupResult { cep, outcome });
        });
    }

    /// Apply every lookup that settled since the last frame
    pub fn drain_lookups(&mut self) {
        while let Ok(result) = self.lookup_rx.try_recv() {
            self.apply_lookup(result);
        }
    }

    /// Single entry point for lookup results. Outcomes for a CEP that no
    /// longer matches the field content are dropped as stale.
    fn apply_lookup(&mut self, result: LookupResult) {
        if result.cep != self.form.cep.as_text() {
            tracing::debug!(cep = %result.cep, "descartando consulta de CEP obsoleta");
            return;
        }
        match result.outcome {
            Ok(Address { logradouro, cidade }) => {
                self.form.logradouro.set_text(logradouro);
                self.form.cidade.set_text(cidade);
                self.error_cep = None;
            }
            Err(err) => {
                tracing::warn!(cep = %result.cep, error = %err, "consulta de CEP falhou");
                self.error_cep = Some(err.to_string());
            }
        }
    }

    /// Validate the whole form; on success notify, log and reset, otherwise
    /// expose the per-field messages and leave every value untouched.
    pub fn submit(&mut self) {
        let data = self.form.values();
        let errors = validation::validate(&data);
        if errors.is_empty() {
            tracing::info!(name = %data.name, email = %data.email, "conta criada");
            self.notice = Some(SUCCESS_MESSAGE.to_string());
            self.form.reset();
            self.errors.clear();
            self.error_cep = None;
        } else {
            let fields: Vec<&str> = errors.keys().map(|id| id.as_str()).collect();
            tracing::debug!(?fields, "validação falhou");
            self.errors = errors;
            self.notice = None;
        }
    }

    /// Await the next settled lookup and apply it (test hook; the event loop
    /// uses `drain_lookups`)
    #[cfg(test)]
    async fn await_lookup(&mut self) {
        if let Some(result) = self.lookup_rx.recv().await {
            self.apply_lookup(result);
        }
    }
}
