//! # Petgram Core
//!
//! The domain layer of the petgram client: two independent state holders
//! ([`session::AuthSession`] and [`feed::FeedStore`]) plus the ports they
//! depend on. This crate contains pure business logic with zero
//! infrastructure dependencies; concrete port implementations live in
//! `petgram-infra`.

pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;
pub mod session;
pub mod validation;

pub use error::{AuthError, GatewayError, RegistryError, ValidationError};
pub use feed::{FeedConfig, FeedStore};
pub use session::{AuthConfig, AuthSession};
