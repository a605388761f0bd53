//! The shared, lock-protected home of all three stores.
//!
//! Each public method is one logical operation and holds every lock it
//! touches for its whole body, so operations never observe each other
//! half-done. Locks are always taken in the order
//! directory → friends → messages; an operation that skips a store simply
//! does not take that lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use codechat_shared::protocol::ChatSummary;
use codechat_shared::{IdentitySupplier, RandomIdentity, UserCode};

use crate::chats::ChatSummaryProjector;
use crate::directory::Directory;
use crate::error::{Result, StoreError};
use crate::friends::FriendGraph;
use crate::messages::MessageLog;
use crate::models::{Friendship, Message, User};

/// Entity counts, for health reporting and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub friendships: usize,
    pub messages: usize,
}

pub struct ChatStore {
    directory: RwLock<Directory>,
    friends: RwLock<FriendGraph>,
    messages: RwLock<MessageLog>,
    ids: Arc<dyn IdentitySupplier>,
}

impl ChatStore {
    /// An empty store minting random ids and codes.
    pub fn new() -> Self {
        Self::with_identity(Arc::new(RandomIdentity::new()))
    }

    pub fn with_identity(ids: Arc<dyn IdentitySupplier>) -> Self {
        Self {
            directory: RwLock::new(Directory::new()),
            friends: RwLock::new(FriendGraph::new()),
            messages: RwLock::new(MessageLog::new()),
            ids,
        }
    }

    pub async fn register(&self, name: String, phone: String) -> Result<User> {
        let mut directory = self.directory.write().await;
        let user = directory.register(name, phone, self.ids.as_ref())?;

        info!(code = %user.code, total = directory.len(), "User registered");
        Ok(user)
    }

    pub async fn add_friend(
        &self,
        user_code: &UserCode,
        friend_code: &UserCode,
    ) -> Result<Friendship> {
        let directory = self.directory.read().await;
        let mut friends = self.friends.write().await;
        let friendship =
            friends.add_friendship(&directory, user_code, friend_code, self.ids.as_ref())?;

        info!(user = %user_code, friend = %friend_code, "Friendship created");
        Ok(friendship)
    }

    pub async fn send_message(
        &self,
        from: &UserCode,
        to: &UserCode,
        text: String,
    ) -> Result<Message> {
        let directory = self.directory.read().await;
        let friends = self.friends.read().await;
        let mut messages = self.messages.write().await;
        let message = messages.append(&directory, &friends, from, to, text, self.ids.as_ref())?;

        info!(from = %from, to = %to, id = %message.id, "Message sent");
        Ok(message)
    }

    /// The chat list of `code`. Unknown codes get an empty list.
    pub async fn chats_for(&self, code: &UserCode) -> Vec<ChatSummary> {
        let directory = self.directory.read().await;
        let friends = self.friends.read().await;
        let messages = self.messages.read().await;

        let chats = ChatSummaryProjector::new(&directory, &friends, &messages).chats_for(code);
        debug!(code = %code, chats = chats.len(), "Chat list projected");
        chats
    }

    /// The conversation between two codes, oldest first. No existence or
    /// friendship check: strangers simply have no messages.
    pub async fn messages_between(&self, a: &UserCode, b: &UserCode) -> Vec<Message> {
        let messages = self.messages.read().await;
        messages.between(a, b)
    }

    pub async fn last_message_between(&self, a: &UserCode, b: &UserCode) -> Option<Message> {
        let messages = self.messages.read().await;
        messages.last_between(a, b).cloned()
    }

    pub async fn user(&self, code: &UserCode) -> Result<User> {
        let directory = self.directory.read().await;
        directory
            .find_by_code(code)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }

    pub async fn are_friends(&self, a: &UserCode, b: &UserCode) -> bool {
        let friends = self.friends.read().await;
        friends.are_friends(a, b)
    }

    pub async fn stats(&self) -> StoreStats {
        let directory = self.directory.read().await;
        let friends = self.friends.read().await;
        let messages = self.messages.read().await;
        StoreStats {
            users: directory.len(),
            friendships: friends.len(),
            messages: messages.len(),
        }
    }
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}
