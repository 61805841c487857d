mod new_account;
mod outcome;
mod request;
mod validator;

pub use new_account::NewAccount;
pub use outcome::{ValidationOutcome, ValidationReason};
pub use request::RegistrationRequest;
pub use validator::RegistrationValidator;
