/// API route modules
pub mod demo;
pub mod health;
pub mod home;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let demo_routes = Router::new()
        .route("/devForm.do", get(demo::dev_form))
        .route("/dev1.do", post(demo::dev1))
        .route("/dev2.do", post(demo::dev2))
        .route("/dev3.do", post(demo::dev3))
        .route("/insertDev.do", post(demo::insert_dev))
        .route("/devList.do", get(demo::dev_list))
        .route(
            "/updateDev.do",
            get(demo::update_dev_form).post(demo::update_dev),
        )
        .route("/deleteDev.do", post(demo::delete_dev));

    Router::new()
        .route("/", get(home::index))
        .route("/api/health", get(health::health))
        .nest("/demo", demo_routes)
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.flash),
            middleware::flash_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
