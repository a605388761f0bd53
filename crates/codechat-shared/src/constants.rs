/// Application name
pub const APP_NAME: &str = "codechat";

/// Number of characters in a user code
pub const CODE_LENGTH: usize = 6;

/// Characters a user code is drawn from (base36, upper case)
pub const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How many fresh codes registration draws before giving up on a collision
pub const MAX_CODE_ATTEMPTS: usize = 32;

/// Default HTTP API port (server)
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Maximum accepted JSON request body in bytes (1 MiB)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
