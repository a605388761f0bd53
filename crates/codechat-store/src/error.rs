use thiserror::Error;

use codechat_shared::UserCode;

/// Errors produced by the store layer.
///
/// Every variant is a domain outcome rather than a fault; the HTTP layer
/// reports them to the client as `success: false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A user with this phone number is already registered.
    #[error("A user with this phone number already exists")]
    DuplicatePhone,

    /// One of the codes does not belong to a registered user.
    #[error("User not found")]
    UserNotFound,

    /// A user tried to befriend themselves.
    #[error("You cannot add yourself as a friend")]
    SelfFriendship,

    /// The two users already share a friendship edge.
    #[error("User is already in your friend list")]
    AlreadyFriends,

    /// Messages may only be sent between friends.
    #[error("User is not in your friend list")]
    NotFriends,

    /// The identity supplier kept producing codes that are already taken.
    #[error("Could not allocate a free user code after {attempts} attempts (last tried {last})")]
    CodeSpaceExhausted { attempts: usize, last: UserCode },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
