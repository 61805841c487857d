use crate::domain::{
    DEFAULT_MIN_PASSWORD_LENGTH, NewAccount, PersonName, RegistrationRequest, UserEmail,
    UserPassword, ValidationOutcome, ValidationReason,
};

/// Checks registration requests, reporting the first rule they break.
///
/// Rules are applied in a fixed order and evaluation stops at the first
/// failure:
///
/// 1. the email is a well-formed `local@domain.tld` address
/// 2. first and last name are both filled in
/// 3. password and confirmation are both filled in
/// 4. password and confirmation are identical
/// 5. the password has at least `min_password_length` graphemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationValidator {
    min_password_length: usize,
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}

impl RegistrationValidator {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn validate(&self, request: &RegistrationRequest) -> ValidationOutcome {
        self.accept(request).into()
    }

    /// Same checks as [`validate`](Self::validate), returning the normalised
    /// account when every rule holds.
    pub fn accept(&self, request: &RegistrationRequest) -> Result<NewAccount, ValidationReason> {
        let email = UserEmail::parse(&request.email)?;
        let first_name = PersonName::parse(&request.first_name)?;
        let last_name = PersonName::parse(&request.last_name)?;
        let password = UserPassword::parse(
            &request.password,
            &request.password_confirmation,
            self.min_password_length,
        )?;

        Ok(NewAccount {
            email,
            password,
            first_name,
            last_name,
        })
    }
}
