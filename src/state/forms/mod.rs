//! Form state for the registration view

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
