//! Undirected friendship graph over user codes.

use chrono::Utc;

use codechat_shared::{IdentitySupplier, UserCode};

use crate::directory::Directory;
use crate::error::{Result, StoreError};
use crate::models::Friendship;

/// Friendship edges in insertion order.
#[derive(Debug, Default)]
pub struct FriendGraph {
    edges: Vec<Friendship>,
}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge between `user_code` and `friend_code`.
    ///
    /// Checks run in order: both users must exist, they must differ, and no
    /// edge may already join them in either orientation.
    pub fn add_friendship(
        &mut self,
        directory: &Directory,
        user_code: &UserCode,
        friend_code: &UserCode,
        ids: &dyn IdentitySupplier,
    ) -> Result<Friendship> {
        if !directory.contains(user_code) || !directory.contains(friend_code) {
            return Err(StoreError::UserNotFound);
        }
        if user_code == friend_code {
            return Err(StoreError::SelfFriendship);
        }
        if self.are_friends(user_code, friend_code) {
            return Err(StoreError::AlreadyFriends);
        }

        let friendship = Friendship {
            id: ids.new_id(),
            user1: user_code.clone(),
            user2: friend_code.clone(),
            created_at: Utc::now(),
        };
        self.edges.push(friendship.clone());
        Ok(friendship)
    }

    pub fn are_friends(&self, a: &UserCode, b: &UserCode) -> bool {
        self.edges.iter().any(|f| f.joins(a, b))
    }

    /// Codes of every friend of `code`, in the order the edges were created.
    pub fn friends_of(&self, code: &UserCode) -> Vec<UserCode> {
        self.edges
            .iter()
            .filter_map(|f| f.other(code))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
