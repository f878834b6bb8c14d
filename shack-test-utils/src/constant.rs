/// Cookie-signing secret used across tests; long enough for a signing key.
pub static TEST_SESSION_SECRET: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
