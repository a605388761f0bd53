//! Per-user chat list, derived on demand from the three stores.

use codechat_shared::protocol::ChatSummary;
use codechat_shared::UserCode;

use crate::directory::Directory;
use crate::friends::FriendGraph;
use crate::messages::MessageLog;

/// Read-side view over borrowed stores. Nothing is cached; every call scans
/// the friendship edges and the message log.
pub struct ChatSummaryProjector<'a> {
    directory: &'a Directory,
    graph: &'a FriendGraph,
    log: &'a MessageLog,
}

impl<'a> ChatSummaryProjector<'a> {
    pub fn new(directory: &'a Directory, graph: &'a FriendGraph, log: &'a MessageLog) -> Self {
        Self {
            directory,
            graph,
            log,
        }
    }

    /// One entry per friend of `code`, in the order the friendships were
    /// made. Friends missing from the directory are skipped.
    pub fn chats_for(&self, code: &UserCode) -> Vec<ChatSummary> {
        self.graph
            .friends_of(code)
            .into_iter()
            .filter_map(|friend_code| {
                let friend = self.directory.find_by_code(&friend_code)?;
                Some(ChatSummary {
                    user_code: friend.code.clone(),
                    name: friend.name.clone(),
                    last_message: self
                        .log
                        .last_between(code, &friend_code)
                        .map(|m| m.text.clone()),
                })
            })
            .collect()
    }
}
