//! CEP resolution against the ViaCEP address service

mod client;
mod traits;

pub use client::{Address, LookupError, ViaCepClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use traits::CepResolver;

#[cfg(test)]
pub use traits::MockCepResolver;
