use chrono::{DateTime, Utc};

/// A registered email/password pair.
///
/// Lives only inside a credential store for the process lifetime and is
/// never exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub registered_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential with the registration timestamp.
    pub fn new(email: String, password: String) -> Self {
        Self {
            email,
            password,
            registered_at: Utc::now(),
        }
    }
}
