//! Trait abstraction for the CEP resolver to enable mocking in tests

use super::{Address, LookupError};
use async_trait::async_trait;

/// Resolves an 8-digit CEP to a street and city
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CepResolver: Send + Sync {
    /// Look up `cep` against the address service.
    ///
    /// Callers must pass exactly 8 decimal digits; the resolver does not
    /// re-validate the format.
    async fn lookup(&self, cep: &str) -> Result<Address, LookupError>;
}
