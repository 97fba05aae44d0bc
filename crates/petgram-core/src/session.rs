//! Authentication state machine.
//!
//! Owns credential validation, the login/signup round trip against the
//! injected [`CredentialStore`], and the session flag. Snapshots are
//! published through a watch channel; the presentation layer subscribes and
//! must acknowledge the one-shot success flags after observing them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::domain::{AuthState, Credential};
use crate::error::{AuthError, RegistryError, ValidationError};
use crate::ports::CredentialStore;
use crate::validation;

/// Tuning knobs for [`AuthSession`].
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Latency of the simulated login/signup round trip. The caller observes
    /// `is_submitting` true for this long. A store backed by a real auth
    /// service would set this to zero and let the network provide latency.
    pub submit_latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            submit_latency: Duration::from_millis(2000),
        }
    }
}

/// Client-side authentication state machine.
///
/// Single logical owner of [`AuthState`]: every transition replaces the
/// snapshot atomically. Validation failures are reported in-state, never
/// returned to the caller; there is no retry policy beyond resubmitting.
pub struct AuthSession {
    store: Arc<dyn CredentialStore>,
    config: AuthConfig,
    state: watch::Sender<AuthState>,
}

impl AuthSession {
    pub fn new(store: Arc<dyn CredentialStore>, config: AuthConfig) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            store,
            config,
            state,
        }
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Update the email field. Clears the field error and any general error;
    /// validation waits until submit.
    pub fn set_email(&self, value: impl Into<String>) {
        self.state.send_modify(|s| {
            s.email = value.into();
            s.email_error = None;
            s.general_error = None;
        });
    }

    /// Update the password field. Clears the field error and any general
    /// error.
    pub fn set_password(&self, value: impl Into<String>) {
        self.state.send_modify(|s| {
            s.password = value.into();
            s.password_error = None;
            s.general_error = None;
        });
    }

    /// Update the confirm-password field. Clears the field error and any
    /// general error.
    pub fn set_confirm_password(&self, value: impl Into<String>) {
        self.state.send_modify(|s| {
            s.confirm_password = value.into();
            s.confirm_password_error = None;
            s.general_error = None;
        });
    }

    /// Validate the current fields and run the login round trip.
    ///
    /// Validation failures set the field errors and abort without
    /// submitting. A call while a submission is already in flight is
    /// rejected. The registry lookup is read-only, so a login attempt is
    /// idempotent.
    pub async fn submit_login(&self) {
        if self.state.borrow().is_submitting {
            tracing::warn!("login rejected: submission already in flight");
            return;
        }

        let (email, password) = {
            let s = self.state.borrow();
            (s.email.clone(), s.password.clone())
        };

        let mut valid = true;
        self.state.send_modify(|s| {
            if !validation::email_is_valid(&email) {
                s.email_error = Some(ValidationError::InvalidEmailFormat);
                valid = false;
            }
            if !validation::password_is_valid(&password) {
                s.password_error = Some(ValidationError::PasswordTooShort);
                valid = false;
            }
        });
        if !valid {
            return;
        }

        self.state.send_modify(|s| {
            s.is_submitting = true;
            s.general_error = None;
        });
        tokio::time::sleep(self.config.submit_latency).await;

        match self.store.find(&email, &password).await {
            Ok(Some(_)) => {
                tracing::debug!(%email, "login succeeded");
                self.state.send_modify(|s| {
                    s.is_submitting = false;
                    s.login_succeeded = true;
                    s.is_session_active = true;
                });
            }
            Ok(None) => {
                tracing::debug!(%email, "credentials rejected");
                self.state.send_modify(|s| {
                    s.is_submitting = false;
                    s.general_error = Some(AuthError::InvalidCredentials);
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "credential store lookup failed");
                self.state.send_modify(|s| {
                    s.is_submitting = false;
                    s.general_error = Some(AuthError::Store(e.to_string()));
                });
            }
        }
    }

    /// Validate the current fields and run the signup round trip.
    ///
    /// All checks run unconditionally so the caller sees every failing field
    /// in one pass; when the email is both registered and malformed, the
    /// shape error wins the field. Signup does not activate the session -
    /// the user still has to log in.
    pub async fn submit_signup(&self) {
        if self.state.borrow().is_submitting {
            tracing::warn!("signup rejected: submission already in flight");
            return;
        }

        let (email, password, confirm) = {
            let s = self.state.borrow();
            (
                s.email.clone(),
                s.password.clone(),
                s.confirm_password.clone(),
            )
        };

        let taken = match self.store.exists_by_email(&email).await {
            Ok(taken) => taken,
            Err(e) => {
                tracing::error!(error = %e, "credential store existence check failed");
                self.state
                    .send_modify(|s| s.general_error = Some(AuthError::Store(e.to_string())));
                return;
            }
        };

        let mut valid = true;
        self.state.send_modify(|s| {
            if taken {
                s.email_error = Some(ValidationError::EmailTaken);
                valid = false;
            }
            if !validation::email_is_valid(&email) {
                s.email_error = Some(ValidationError::InvalidEmailFormat);
                valid = false;
            }
            if !validation::password_is_valid(&password) {
                s.password_error = Some(ValidationError::PasswordTooShort);
                valid = false;
            }
            if password != confirm {
                s.confirm_password_error = Some(ValidationError::PasswordMismatch);
                valid = false;
            }
        });
        if !valid {
            return;
        }

        self.state.send_modify(|s| s.is_submitting = true);
        tokio::time::sleep(self.config.submit_latency).await;

        match self.store.append(Credential::new(email.clone(), password)).await {
            Ok(()) => {
                tracing::debug!(%email, "signup registered");
                self.state.send_modify(|s| {
                    s.is_submitting = false;
                    s.signup_succeeded = true;
                });
            }
            Err(RegistryError::Duplicate) => {
                // Lost a race against a concurrent registration of the same
                // email; the store's atomic append is the authority.
                tracing::warn!(%email, "signup lost duplicate race");
                self.state.send_modify(|s| {
                    s.is_submitting = false;
                    s.email_error = Some(ValidationError::EmailTaken);
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "credential store append failed");
                self.state.send_modify(|s| {
                    s.is_submitting = false;
                    s.general_error = Some(AuthError::Store(e.to_string()));
                });
            }
        }
    }

    /// Clear the one-shot login flag after the consumer observed it.
    /// The session itself stays active.
    pub fn acknowledge_login(&self) {
        self.state.send_modify(|s| s.login_succeeded = false);
    }

    /// Clear the one-shot signup flag and the text fields, readying the form
    /// for the follow-up login.
    pub fn acknowledge_signup(&self) {
        self.state.send_modify(|s| {
            s.signup_succeeded = false;
            s.email.clear();
            s.password.clear();
            s.confirm_password.clear();
        });
    }

    /// Reset to the initial state. The credential store is untouched, so
    /// signed-up users stay valid across logout/login cycles.
    pub fn logout(&self) {
        self.state.send_replace(AuthState::default());
    }
}
