// Run with: cargo fuzz run fuzz_validate_request
// Checks that validation is deterministic and that `accept` agrees with `validate`.
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parking_registration::domain::{RegistrationRequest, RegistrationValidator};

#[derive(Arbitrary, Debug)]
struct Fields {
    email: String,
    password: String,
    password_confirmation: String,
    first_name: String,
    last_name: String,
    min_password_length: u8,
}

fuzz_target!(|fields: Fields| {
    let validator = RegistrationValidator::new(fields.min_password_length.into());
    let request = RegistrationRequest::new(
        fields.email,
        fields.password,
        fields.password_confirmation,
        fields.first_name,
        fields.last_name,
    );

    let outcome = validator.validate(&request);
    assert_eq!(outcome, validator.validate(&request));
    assert_eq!(outcome.is_valid(), validator.accept(&request).is_ok());
});
