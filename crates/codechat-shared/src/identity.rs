use rand::Rng;
use uuid::Uuid;

use crate::constants::{CODE_ALPHABET, CODE_LENGTH};
use crate::types::UserCode;

/// Mints internal ids and public user codes.
///
/// Ids must be globally unique. Codes only need to be short and shareable;
/// the directory is responsible for rejecting a code that is already taken.
pub trait IdentitySupplier: Send + Sync {
    fn new_id(&self) -> Uuid;

    fn new_code(&self) -> UserCode;
}

/// Random v4 UUIDs and random base36 codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentity;

impl RandomIdentity {
    pub fn new() -> Self {
        Self
    }
}

impl IdentitySupplier for RandomIdentity {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn new_code(&self) -> UserCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        UserCode(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let ids = RandomIdentity::new();
        for _ in 0..100 {
            let code = ids.new_code();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code
                .as_str()
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids = RandomIdentity::new();
        assert_ne!(ids.new_id(), ids.new_id());
    }
}
