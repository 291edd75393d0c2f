use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::error::panic_response;
use crate::presentation::handlers::{
    combine_narrative_handler, health_handler, process_audio_handler, read_users_me_handler,
    token_handler,
};
use crate::presentation::middleware::require_active_user;
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let protected = Router::new()
        .route("/users/me", get(read_users_me_handler))
        .route("/process_audio/", post(process_audio_handler))
        .route("/combine_narrative/", post(combine_narrative_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_active_user,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .route("/token", post(token_handler))
        .merge(protected)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
