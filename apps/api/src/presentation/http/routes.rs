use super::{
    handlers::{courses, health, me},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Catalog
        .route("/api/v1/courses", get(courses::list_courses))
        .route(
            "/api/v1/courses/{id}/reviews",
            get(courses::get_course_reviews),
        )
        // Learner workspace (bearer token required)
        .route("/api/v1/enrollments/my", get(me::list_my_enrollments))
        .route("/api/v1/videos/history", get(me::get_watch_history))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
