pub mod health;

use axum::{
    response::Html,
    routing::{get, patch, post},
    Router,
};

use crate::chat::handlers;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // The single page
        .route("/", get(serve_index))
        // Session API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/messages",
            post(handlers::handle_send_message),
        )
        .route("/api/v1/sessions/:id/clear", post(handlers::handle_clear))
        .route(
            "/api/v1/sessions/:id/settings",
            patch(handlers::handle_update_settings),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(resume::handle_upload_resume),
        )
        .with_state(state)
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../ui/index.html"))
}
