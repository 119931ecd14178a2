//! Axum route handlers for the chat session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::chat::manager::SessionId;
use crate::chat::session::ChatSession;
use crate::chat::settings::SettingsUpdate;
use crate::chat::turn_cycle::{run_turn, ChatView};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: SessionId,
    pub view: ChatView,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

async fn lookup(
    state: &AppState,
    id: &SessionId,
) -> Result<Arc<Mutex<ChatSession>>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<CreateSessionResponse> {
    let (session_id, session) = state.sessions.create().await;
    let view = ChatView::of(&*session.lock().await);
    Json(CreateSessionResponse { session_id, view })
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<ChatView>, AppError> {
    let session = lookup(&state, &id).await?;
    let view = ChatView::of(&*session.lock().await);
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/messages
///
/// Runs one turn cycle. The session lock is held for the duration, so a
/// second submit to the same session waits for the first to finish. A
/// completion failure still returns 200: the view carries the error and the
/// attempted user turn.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ChatView>, AppError> {
    let session = lookup(&state, &id).await?;
    let mut session = session.lock().await;
    let view = run_turn(&mut session, &request.content, state.completions.as_ref()).await;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/clear
pub async fn handle_clear(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<ChatView>, AppError> {
    let session = lookup(&state, &id).await?;
    let mut session = session.lock().await;
    session.clear();
    Ok(Json(ChatView::of(&session)))
}

/// PATCH /api/v1/sessions/:id/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<ChatView>, AppError> {
    let session = lookup(&state, &id).await?;
    let mut session = session.lock().await;
    session.settings.apply(update)?;
    Ok(Json(ChatView::of(&session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}
