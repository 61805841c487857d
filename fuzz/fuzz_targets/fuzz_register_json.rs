// Run with: cargo fuzz run fuzz_register_json
// Feeds JSON form payloads through the validator the way a front end would.
#![no_main]

use libfuzzer_sys::fuzz_target;
use parking_registration::domain::{RegistrationRequest, RegistrationValidator};
use serde_json::Value;

fn field(v: &Value, name: &str) -> String {
    v.get(name)
        .and_then(|s| s.as_str())
        .unwrap_or("")
        .to_string()
}

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = serde_json::from_slice::<Value>(data) {
        let request = RegistrationRequest::new(
            field(&v, "email"),
            field(&v, "password"),
            field(&v, "password_confirmation"),
            field(&v, "first_name"),
            field(&v, "last_name"),
        );

        let _ = RegistrationValidator::default().validate(&request);
    }
});
