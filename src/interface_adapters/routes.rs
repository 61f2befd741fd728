use crate::interface_adapters::handlers::{
    debug_list, fetch_result, generate_link, share_page, submit_location,
};
use crate::interface_adapters::middleware::log_requests;
use crate::interface_adapters::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/generate-link", get(generate_link))
        .route("/share", get(share_page))
        .route("/location/{token}", post(submit_location))
        .route("/result/{token}", get(fetch_result))
        .route("/debug-list", get(debug_list))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
