//! Domain entities - the core business objects.

mod credential;
mod post;
mod state;

pub use credential::Credential;
pub use post::{Media, Post};
pub use state::{AuthState, FeedState};
