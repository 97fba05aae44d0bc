//! # Petgram Infrastructure
//!
//! Concrete implementations of the ports defined in `petgram-core`: the
//! in-memory credential store and the HTTP posts gateway.

pub mod gateway;
pub mod registry;

pub use gateway::HttpPostsGateway;
pub use registry::InMemoryCredentialStore;
