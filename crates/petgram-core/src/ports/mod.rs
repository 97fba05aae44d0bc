//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod gateway;
mod registry;

pub use gateway::{PostRecord, PostsGateway};
pub use registry::CredentialStore;
