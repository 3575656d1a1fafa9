use crate::{
    application::{
        my_enrollments::use_case::MyEnrollmentsUseCase, shared::dto::PageQuery,
        watch_history::use_case::WatchHistoryUseCase,
    },
    domain::{
        course::entity::{EnrollmentWithCourse, VideoWatchHistory},
        shared::pagination::PaginatedResponse,
    },
    presentation::http::{
        errors::AppError, extract::ApiQuery, middleware::user::require_user_id, state::AppState,
    },
};
use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use tracing::instrument;

/// `GET /api/v1/videos/history` - the caller's watch history.
#[instrument(skip_all)]
pub async fn get_watch_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> Result<Json<PaginatedResponse<VideoWatchHistory>>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let use_case = WatchHistoryUseCase::new(state.course_repo.clone(), state.config.page_limits());
    Ok(Json(use_case.execute(user_id, &page).await?))
}

/// `GET /api/v1/enrollments/my` - the caller's enrollments with their courses.
#[instrument(skip_all)]
pub async fn list_my_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> Result<Json<PaginatedResponse<EnrollmentWithCourse>>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let use_case =
        MyEnrollmentsUseCase::new(state.course_repo.clone(), state.config.page_limits());
    Ok(Json(use_case.execute(user_id, &page).await?))
}
