/// The first rule a registration request violated.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReason {
    #[error("The email address is empty or malformed.")]
    InvalidEmail,

    #[error("The first or last name is blank.")]
    MissingName,

    #[error("The password or its confirmation is blank.")]
    MissingPassword,

    #[error("The password and its confirmation differ.")]
    PasswordMismatch,

    #[error("The password is shorter than the minimum length.")]
    PasswordTooShort,
}

impl ValidationReason {
    /// Whether the caller should wipe both password fields before re-prompting.
    pub fn clears_passwords(self) -> bool {
        matches!(
            self,
            ValidationReason::PasswordMismatch | ValidationReason::PasswordTooShort
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

impl<T> From<Result<T, ValidationReason>> for ValidationOutcome {
    fn from(result: Result<T, ValidationReason>) -> Self {
        match result {
            Ok(_) => ValidationOutcome::Valid,
            Err(reason) => ValidationOutcome::Invalid(reason),
        }
    }
}
