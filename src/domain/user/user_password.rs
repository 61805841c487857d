use secrecy::{ExposeSecret, Secret};
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::ValidationReason;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 4;

#[derive(Debug)]
pub struct UserPassword(Secret<String>);

impl UserPassword {
    /// Checks a password against its confirmation.
    ///
    /// Blank means empty once trimmed; the comparison and the length check
    /// use the password exactly as typed.
    pub fn parse(
        password: &Secret<String>,
        confirmation: &Secret<String>,
        min_length: usize,
    ) -> Result<Self, ValidationReason> {
        let password = password.expose_secret();
        let confirmation = confirmation.expose_secret();

        if password.trim().is_empty() || confirmation.trim().is_empty() {
            return Err(ValidationReason::MissingPassword);
        }

        if password != confirmation {
            return Err(ValidationReason::PasswordMismatch);
        }

        if password.graphemes(true).count() < min_length {
            return Err(ValidationReason::PasswordTooShort);
        }

        Ok(Self(Secret::new(password.clone())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
