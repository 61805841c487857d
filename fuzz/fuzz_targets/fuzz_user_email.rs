// Run with: cargo fuzz run fuzz_user_email
// Looks for panics and pathological slowness in email parsing.
#![no_main]

use libfuzzer_sys::fuzz_target;
use parking_registration::domain::UserEmail;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(email) = UserEmail::parse(s) {
            // an accepted address never keeps surrounding or inner whitespace
            assert!(!email.as_ref().chars().any(char::is_whitespace));
            assert!(email.as_ref().contains('@'));
        }
    }
});
