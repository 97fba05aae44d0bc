//! Credential store implementations.

mod memory;

pub use memory::InMemoryCredentialStore;
