use async_trait::async_trait;

use crate::domain::Credential;
use crate::error::RegistryError;

/// Credential registry port.
///
/// The in-memory implementation lives in `petgram-infra`; a real deployment
/// can back this with an actual auth service without touching the session
/// state machine.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a credential by exact email/password match.
    async fn find(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Credential>, RegistryError>;

    /// Whether any credential is registered under this email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, RegistryError>;

    /// Register a new credential.
    ///
    /// Implementations must check for an already-registered email atomically
    /// with the insert and fail with [`RegistryError::Duplicate`]. The
    /// session's `exists_by_email` pre-check only exists to produce a field
    /// error before the round trip starts; it is not a synchronization point.
    async fn append(&self, credential: Credential) -> Result<(), RegistryError>;
}
