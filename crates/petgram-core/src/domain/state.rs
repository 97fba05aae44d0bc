use serde::Serialize;

use super::Post;
use crate::error::{AuthError, ValidationError};

/// Snapshot of the authentication state machine.
///
/// Replaced atomically on every transition. `login_succeeded` and
/// `signup_succeeded` are one-shot flags: the consumer must acknowledge them
/// after observing them true, or an unrelated re-render would re-trigger its
/// navigation side effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub email_error: Option<ValidationError>,
    pub password_error: Option<ValidationError>,
    pub confirm_password_error: Option<ValidationError>,
    pub general_error: Option<AuthError>,
    /// True only strictly between submit-start and submit-complete.
    pub is_submitting: bool,
    pub login_succeeded: bool,
    pub signup_succeeded: bool,
    pub is_session_active: bool,
}

/// Snapshot of the feed, newest post first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub is_loading: bool,
}
