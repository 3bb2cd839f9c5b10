//! Shared constant values for test fixtures.

/// Password assigned to users created by fixtures. Not a real credential.
pub static TEST_PASSWORD: &str = "test_password";

/// Domain used to derive fixture email addresses from usernames.
pub static TEST_EMAIL_DOMAIN: &str = "holocron.test";
