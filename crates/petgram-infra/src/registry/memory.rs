//! In-memory credential store.
//!
//! Process-lifetime only: registered credentials are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use petgram_core::domain::Credential;
use petgram_core::error::RegistryError;
use petgram_core::ports::CredentialStore;

/// Credential store backed by a Vec behind an async RwLock.
pub struct InMemoryCredentialStore {
    users: RwLock<Vec<Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Store seeded with the demo account `test@test.com` / `123456`.
    pub fn with_demo_user() -> Self {
        Self {
            users: RwLock::new(vec![Credential::new(
                "test@test.com".to_string(),
                "123456".to_string(),
            )]),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Credential>, RegistryError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|c| c.email == email && c.password == password)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RegistryError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|c| c.email == email))
    }

    async fn append(&self, credential: Credential) -> Result<(), RegistryError> {
        // Duplicate check and insert under the same write lock.
        let mut users = self.users.write().await;
        if users.iter().any(|c| c.email == credential.email) {
            return Err(RegistryError::Duplicate);
        }
        tracing::debug!(email = %credential.email, "credential registered");
        users.push(credential);
        Ok(())
    }
}
