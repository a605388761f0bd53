//! JSON records exchanged with clients over the HTTP API.
//!
//! Field names are camelCase on the wire; every field of a request is
//! required.

use serde::{Deserialize, Serialize};

use crate::types::UserCode;

/// `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
}

/// `POST /api/add-friend`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest {
    pub user_code: UserCode,
    pub friend_code: UserCode,
}

/// `POST /api/send-message`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub from_user: UserCode,
    pub to_user: UserCode,
    pub text: String,
}

/// The part of a user that is shown to other users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicUser {
    pub code: UserCode,
    pub name: String,
    pub phone: String,
}

/// One entry of a user's chat list: a friend and the latest text exchanged
/// with them, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub user_code: UserCode,
    pub name: String,
    pub last_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_use_camel_case() {
        let req: SendMessageRequest =
            serde_json::from_str(r#"{"fromUser":"AAA111","toUser":"BBB222","text":""}"#).unwrap();
        assert_eq!(req.from_user.as_str(), "AAA111");
        assert_eq!(req.to_user.as_str(), "BBB222");
        assert!(req.text.is_empty());

        let req: AddFriendRequest =
            serde_json::from_str(r#"{"userCode":"AAA111","friendCode":"BBB222"}"#).unwrap();
        assert_eq!(req.friend_code.as_str(), "BBB222");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        assert!(serde_json::from_str::<RegisterRequest>(r#"{"name":"Alice"}"#).is_err());
    }

    #[test]
    fn test_chat_summary_without_messages_serializes_null() {
        let summary = ChatSummary {
            user_code: UserCode::from("BOB000"),
            name: "Bob".to_string(),
            last_message: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "userCode": "BOB000", "name": "Bob", "lastMessage": null })
        );
    }
}
