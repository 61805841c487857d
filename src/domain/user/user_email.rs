use std::fmt::{self, Display, Formatter};

use validator::ValidateEmail;

use crate::domain::ValidationReason;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEmail(String);

impl UserEmail {
    /// Returns an instance of `UserEmail` if the address is non-empty and of the
    /// form `local@domain.tld`. IP-literal domains (`a@[127.0.0.1]`) are refused.
    pub fn parse(s: &str) -> Result<Self, ValidationReason> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationReason::InvalidEmail);
        }

        // RFC 5321: 64 local + 1 @ + 255 domain = 320 characters
        if trimmed.len() > 320 {
            return Err(ValidationReason::InvalidEmail);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationReason::InvalidEmail);
        }

        // `validate_email` accepts dotless hosts such as `user@localhost`
        let has_dotted_domain = trimmed.rsplit_once('@').is_some_and(|(_, domain)| {
            domain.contains('.') && !domain.ends_with('.') && !domain.starts_with('[')
        });

        if !has_dotted_domain || !trimmed.validate_email() {
            return Err(ValidationReason::InvalidEmail);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UserEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
