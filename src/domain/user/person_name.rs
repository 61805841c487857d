use std::fmt::{self, Display, Formatter};

use crate::domain::ValidationReason;

/// A first or last name as typed by the user, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(s: &str) -> Result<Self, ValidationReason> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationReason::MissingName);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
