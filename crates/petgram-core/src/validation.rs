//! Email and password rules applied at submit time.
//!
//! Field edits never validate; the session runs these checks when a
//! submission starts.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

// Local part of 1-256 chars, one host label, then one or more dot-separated
// labels. Labels must start alphanumeric and may continue with hyphens.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9+._%-]{1,256}@[A-Za-z0-9][A-Za-z0-9-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9-]{0,25})+$",
    )
    .expect("email pattern compiles")
});

/// Whether `email` matches the accepted address shape.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `password` meets the minimum length.
pub fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}
