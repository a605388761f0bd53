//! Append-only log of messages between friends.

use chrono::Utc;

use codechat_shared::{IdentitySupplier, UserCode};

use crate::directory::Directory;
use crate::error::{Result, StoreError};
use crate::friends::FriendGraph;
use crate::models::Message;

#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message from `from` to `to`, stamped with the current time.
    ///
    /// Both users must exist and be friends. The text is not inspected.
    pub fn append(
        &mut self,
        directory: &Directory,
        graph: &FriendGraph,
        from: &UserCode,
        to: &UserCode,
        text: String,
        ids: &dyn IdentitySupplier,
    ) -> Result<Message> {
        if !directory.contains(from) || !directory.contains(to) {
            return Err(StoreError::UserNotFound);
        }
        if !graph.are_friends(from, to) {
            return Err(StoreError::NotFriends);
        }

        let message = Message {
            id: ids.new_id(),
            from_user: from.clone(),
            to_user: to.clone(),
            text,
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    /// The conversation between `a` and `b`, oldest first.
    ///
    /// Messages with equal timestamps keep the order they were appended in.
    pub fn between(&self, a: &UserCode, b: &UserCode) -> Vec<Message> {
        let mut conversation: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.is_between(a, b))
            .cloned()
            .collect();
        conversation.sort_by_key(|m| m.timestamp);
        conversation
    }

    /// The newest message between `a` and `b`; on a timestamp tie, the one
    /// appended last.
    pub fn last_between(&self, a: &UserCode, b: &UserCode) -> Option<&Message> {
        self.messages
            .iter()
            .filter(|m| m.is_between(a, b))
            .max_by_key(|m| m.timestamp)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
