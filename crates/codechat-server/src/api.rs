use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::Method,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use codechat_shared::protocol::{
    AddFriendRequest, ChatSummary, PublicUser, RegisterRequest, SendMessageRequest,
};
use codechat_shared::UserCode;
use codechat_store::{ChatStore, Message};

use crate::config::ServerConfig;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ChatStore>,
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/register", post(register))
        .route("/api/add-friend", post(add_friend))
        .route("/api/chats/:user_code", get(chats))
        .route("/api/send-message", post(send_message))
        .route("/api/messages/:user_code/:friend_code", get(messages))
        .route("/api/user/:user_code", get(user))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    users: usize,
    friendships: usize,
    messages: usize,
}

/// `{"success": ..., "message": ...}`, used for write acknowledgements and
/// for every failure.
#[derive(Debug, Serialize)]
pub(crate) struct AckResponse {
    success: bool,
    message: String,
}

impl AckResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub(crate) fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct UserResponse {
    success: bool,
    user: PublicUser,
}

#[derive(Serialize)]
struct ChatsResponse {
    success: bool,
    chats: Vec<ChatSummary>,
}

#[derive(Serialize)]
struct MessagesResponse {
    success: bool,
    messages: Vec<Message>,
}

/// Unwrap a JSON body, turning a missing field or a malformed document into
/// an [`ApiError::BadRequest`] instead of axum's 4xx rejection.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.store.stats().await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        users: stats.users,
        friendships: stats.friendships,
        messages: stats.messages,
    })
}

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let req = body(payload)?;
    let user = state.store.register(req.name, req.phone).await?;

    Ok(Json(UserResponse {
        success: true,
        user: user.public(),
    }))
}

async fn add_friend(
    State(state): State<AppState>,
    payload: Result<Json<AddFriendRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, ApiError> {
    let req = body(payload)?;
    state
        .store
        .add_friend(&req.user_code, &req.friend_code)
        .await?;

    Ok(Json(AckResponse::ok("Friend added successfully")))
}

async fn chats(
    State(state): State<AppState>,
    Path(user_code): Path<UserCode>,
) -> Json<ChatsResponse> {
    let chats = state.store.chats_for(&user_code).await;
    Json(ChatsResponse {
        success: true,
        chats,
    })
}

async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, ApiError> {
    let req = body(payload)?;
    state
        .store
        .send_message(&req.from_user, &req.to_user, req.text)
        .await?;

    Ok(Json(AckResponse::ok("Message sent")))
}

async fn messages(
    State(state): State<AppState>,
    Path((user_code, friend_code)): Path<(UserCode, UserCode)>,
) -> Json<MessagesResponse> {
    let messages = state.store.messages_between(&user_code, &friend_code).await;
    Json(MessagesResponse {
        success: true,
        messages,
    })
}

async fn user(
    State(state): State<AppState>,
    Path(user_code): Path<UserCode>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.store.user(&user_code).await?;
    Ok(Json(UserResponse {
        success: true,
        user: user.public(),
    }))
}

pub async fn serve(
    state: AppState,
    addr: std::net::SocketAddr,
) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
