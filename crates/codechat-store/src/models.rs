//! Domain records held by the in-memory stores.
//!
//! Records are created once and never mutated. `Message` is sent to clients
//! verbatim, so it serializes with the API's camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use codechat_shared::protocol::PublicUser;
use codechat_shared::UserCode;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Internal identifier, never exposed over the API.
    pub id: Uuid,
    /// Public handle used by every other operation.
    pub code: UserCode,
    /// Display name.
    pub name: String,
    /// Phone number; unique across users.
    pub phone: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The view of this user that other clients may see.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            code: self.code.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Friendship
// ---------------------------------------------------------------------------

/// An undirected friendship edge between two distinct user codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: Uuid,
    /// The user who asked for the friendship.
    pub user1: UserCode,
    /// The user who was added.
    pub user2: UserCode,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn joins(&self, a: &UserCode, b: &UserCode) -> bool {
        (self.user1 == *a && self.user2 == *b) || (self.user1 == *b && self.user2 == *a)
    }

    /// The endpoint that is not `code`, if `code` is on this edge.
    pub fn other(&self, code: &UserCode) -> Option<&UserCode> {
        if self.user1 == *code {
            Some(&self.user2)
        } else if self.user2 == *code {
            Some(&self.user1)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A text message sent from one friend to another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    /// Sender code.
    pub from_user: UserCode,
    /// Recipient code.
    pub to_user: UserCode,
    /// Message body, stored exactly as sent.
    pub text: String,
    /// When the server accepted the message.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Whether this message belongs to the conversation between `a` and `b`.
    pub fn is_between(&self, a: &UserCode, b: &UserCode) -> bool {
        (self.from_user == *a && self.to_user == *b) || (self.from_user == *b && self.to_user == *a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &str, b: &str) -> Friendship {
        Friendship {
            id: Uuid::new_v4(),
            user1: a.into(),
            user2: b.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_friendship_is_symmetric() {
        let f = edge("AAAAAA", "BBBBBB");
        assert!(f.joins(&"AAAAAA".into(), &"BBBBBB".into()));
        assert!(f.joins(&"BBBBBB".into(), &"AAAAAA".into()));
        assert!(!f.joins(&"AAAAAA".into(), &"CCCCCC".into()));

        assert_eq!(f.other(&"BBBBBB".into()), Some(&UserCode::from("AAAAAA")));
        assert_eq!(f.other(&"CCCCCC".into()), None);
    }

    #[test]
    fn test_message_wire_format() {
        let msg = Message {
            id: Uuid::nil(),
            from_user: "AAAAAA".into(),
            to_user: "BBBBBB".into(),
            text: "hi".to_string(),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["fromUser"], "AAAAAA");
        assert_eq!(value["toUser"], "BBBBBB");
        assert_eq!(value["text"], "hi");
        assert!(value["timestamp"].is_string());
        assert!(value.get("id").is_some());
    }
}
