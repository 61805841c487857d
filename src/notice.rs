use std::fmt::{self, Display, Formatter};

use crate::domain::ValidationReason;
use crate::registration_flow::SubmitError;
use crate::registration_service::RegistrationResult;

/// The short messages a front end shows after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    InvalidEmail,
    InvalidNames,
    InvalidPassword,
    PasswordsDoNotMatch,
    PasswordTooShort,
    EmailTaken,
    UserCreated,
    ServiceUnavailable,
    SubmissionInProgress,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::InvalidEmail => "Please enter a valid email address",
            Notice::InvalidNames => "Please enter your first and last name",
            Notice::InvalidPassword => "Please enter and confirm a password",
            Notice::PasswordsDoNotMatch => "Passwords do not match",
            Notice::PasswordTooShort => "Password is too short",
            Notice::EmailTaken => "That email address is already registered",
            Notice::UserCreated => "User Created",
            Notice::ServiceUnavailable => "Could not reach the server, please try again",
            Notice::SubmissionInProgress => "Registration already in progress",
        }
    }

    /// `None` for a cancelled attempt, whose result nobody is waiting for.
    pub fn for_submission(result: &Result<RegistrationResult, SubmitError>) -> Option<Self> {
        match result {
            Ok(result) => Some(result.into()),
            Err(SubmitError::Rejected(reason)) => Some((*reason).into()),
            Err(SubmitError::InProgress) => Some(Notice::SubmissionInProgress),
            Err(SubmitError::Cancelled) => None,
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<ValidationReason> for Notice {
    fn from(reason: ValidationReason) -> Self {
        match reason {
            ValidationReason::InvalidEmail => Notice::InvalidEmail,
            ValidationReason::MissingName => Notice::InvalidNames,
            ValidationReason::MissingPassword => Notice::InvalidPassword,
            ValidationReason::PasswordMismatch => Notice::PasswordsDoNotMatch,
            ValidationReason::PasswordTooShort => Notice::PasswordTooShort,
        }
    }
}

impl From<&RegistrationResult> for Notice {
    fn from(result: &RegistrationResult) -> Self {
        match result {
            RegistrationResult::Created(_) => Notice::UserCreated,
            RegistrationResult::EmailAlreadyTaken => Notice::EmailTaken,
            RegistrationResult::ServiceError(_) => Notice::ServiceUnavailable,
        }
    }
}
