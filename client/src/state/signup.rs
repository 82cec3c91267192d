//! Signup form state and password validation.
//!
//! DESIGN
//! ======
//! `password_error` is a pure function of the two password fields. The page
//! wraps it in a `Memo` over both signals, so the displayed message is
//! recomputed whenever either field changes and never depends on the order
//! of keystrokes. `validate_submit` repeats the checks synchronously because
//! an untouched form has no reactive error yet.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use thiserror::Error;

use super::login::Credentials;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 4;

/// A signup rule the current input breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("비밀번호는 4자 이상이어야 합니다.")]
    PasswordTooShort,
    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,
}

/// The three signup fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Live validation message for the current field values.
    #[must_use]
    pub fn password_error(&self) -> Option<SignupError> {
        password_error(&self.password, &self.confirm_password)
    }

    /// Gate a submit attempt.
    ///
    /// `current_error` is the last reactive result shown to the user; it is
    /// reported first so the alert matches what is on screen.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule; the caller alerts it and stops.
    pub fn validate_submit(&self, current_error: Option<SignupError>) -> Result<Credentials, SignupError> {
        if let Some(err) = current_error {
            return Err(err);
        }
        if char_len(&self.password) < MIN_PASSWORD_CHARS {
            return Err(SignupError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(Credentials::new(self.email.clone(), self.password.clone()))
    }
}

/// Reactive validation rule.
///
/// An empty password shows nothing yet; a short one is reported before a
/// mismatch; a mismatch only once the confirmation has input.
#[must_use]
pub fn password_error(password: &str, confirm_password: &str) -> Option<SignupError> {
    let len = char_len(password);
    if len > 0 && len < MIN_PASSWORD_CHARS {
        Some(SignupError::PasswordTooShort)
    } else if !confirm_password.is_empty() && password != confirm_password {
        Some(SignupError::PasswordMismatch)
    } else {
        None
    }
}

/// Message text for an optional error; empty when the form is valid.
#[must_use]
pub fn error_message(error: Option<SignupError>) -> String {
    error.map(|e| e.to_string()).unwrap_or_default()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
