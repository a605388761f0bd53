//! Registered users, indexed by phone number and by code.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, warn};

use codechat_shared::constants::MAX_CODE_ATTEMPTS;
use codechat_shared::{IdentitySupplier, UserCode};

use crate::error::{Result, StoreError};
use crate::models::User;

#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    by_code: HashMap<UserCode, usize>,
    by_phone: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// Fails with [`StoreError::DuplicatePhone`] if the phone is taken. Codes
    /// that collide with an existing user are redrawn, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    pub fn register(
        &mut self,
        name: String,
        phone: String,
        ids: &dyn IdentitySupplier,
    ) -> Result<User> {
        if self.find_by_phone(&phone).is_some() {
            return Err(StoreError::DuplicatePhone);
        }

        let code = self.allocate_code(ids)?;
        let user = User {
            id: ids.new_id(),
            code,
            name,
            phone,
            created_at: Utc::now(),
        };

        let index = self.users.len();
        self.by_code.insert(user.code.clone(), index);
        self.by_phone.insert(user.phone.clone(), index);
        self.users.push(user.clone());

        Ok(user)
    }

    fn allocate_code(&self, ids: &dyn IdentitySupplier) -> Result<UserCode> {
        let mut last = ids.new_code();
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            if !self.by_code.contains_key(&last) {
                return Ok(last);
            }
            debug!(code = %last, attempt, "User code already taken, drawing another");
            if attempt < MAX_CODE_ATTEMPTS {
                last = ids.new_code();
            }
        }

        warn!(attempts = MAX_CODE_ATTEMPTS, "Gave up allocating a user code");
        Err(StoreError::CodeSpaceExhausted {
            attempts: MAX_CODE_ATTEMPTS,
            last,
        })
    }

    pub fn find_by_code(&self, code: &UserCode) -> Option<&User> {
        self.by_code.get(code).map(|&i| &self.users[i])
    }

    pub fn find_by_phone(&self, phone: &str) -> Option<&User> {
        self.by_phone.get(phone).map(|&i| &self.users[i])
    }

    pub fn contains(&self, code: &UserCode) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use uuid::Uuid;

    use codechat_shared::RandomIdentity;

    use super::*;

    /// Hands out a fixed sequence of codes, repeating the last one forever.
    pub(crate) struct ScriptedIdentity {
        codes: Mutex<Vec<String>>,
    }

    impl ScriptedIdentity {
        pub(crate) fn new(codes: &[&str]) -> Self {
            let mut codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            codes.reverse();
            Self {
                codes: Mutex::new(codes),
            }
        }
    }

    impl IdentitySupplier for ScriptedIdentity {
        fn new_id(&self) -> Uuid {
            Uuid::new_v4()
        }

        fn new_code(&self) -> UserCode {
            let mut codes = self.codes.lock().unwrap();
            let code = if codes.len() > 1 {
                codes.pop().unwrap()
            } else {
                codes[0].clone()
            };
            UserCode(code)
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut dir = Directory::new();
        let alice = dir
            .register("Alice".into(), "1".into(), &RandomIdentity)
            .unwrap();

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.find_by_code(&alice.code), Some(&alice));
        assert_eq!(dir.find_by_phone("1").map(|u| &u.name), Some(&"Alice".to_string()));
        assert!(dir.find_by_code(&"NOPE00".into()).is_none());
    }

    #[test]
    fn test_duplicate_phone_rejected() {
        let mut dir = Directory::new();
        dir.register("Alice".into(), "1".into(), &RandomIdentity)
            .unwrap();

        let err = dir
            .register("Mallory".into(), "1".into(), &RandomIdentity)
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicatePhone);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_distinct_phones_get_distinct_codes() {
        let mut dir = Directory::new();
        let codes: Vec<UserCode> = (0..50)
            .map(|i| {
                dir.register(format!("user{i}"), i.to_string(), &RandomIdentity)
                    .unwrap()
                    .code
            })
            .collect();

        for (i, a) in codes.iter().enumerate() {
            assert!(!a.as_str().is_empty());
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_colliding_code_is_redrawn() {
        let ids = ScriptedIdentity::new(&["AAAAAA", "AAAAAA", "BBBBBB"]);
        let mut dir = Directory::new();

        let first = dir.register("Alice".into(), "1".into(), &ids).unwrap();
        let second = dir.register("Bob".into(), "2".into(), &ids).unwrap();

        assert_eq!(first.code.as_str(), "AAAAAA");
        assert_eq!(second.code.as_str(), "BBBBBB");
    }

    #[test]
    fn test_code_space_exhausted() {
        let ids = ScriptedIdentity::new(&["AAAAAA"]);
        let mut dir = Directory::new();
        dir.register("Alice".into(), "1".into(), &ids).unwrap();

        let err = dir.register("Bob".into(), "2".into(), &ids).unwrap_err();
        assert!(matches!(
            err,
            StoreError::CodeSpaceExhausted { attempts: MAX_CODE_ATTEMPTS, .. }
        ));
        assert_eq!(dir.len(), 1);
        assert!(dir.find_by_phone("2").is_none());
    }
}
