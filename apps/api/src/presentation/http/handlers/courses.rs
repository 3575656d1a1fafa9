use crate::{
    application::{
        course_reviews::use_case::CourseReviewsUseCase, list_courses::dto::CourseListQuery,
        list_courses::use_case::ListCoursesUseCase, shared::dto::PageQuery,
    },
    domain::{
        course::entity::{Course, CourseReview},
        shared::pagination::PaginatedResponse,
    },
    presentation::http::{errors::AppError, extract::ApiQuery, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// `GET /api/v1/courses` - published courses, filtered and paginated.
///
/// # Errors
/// `AppError::ValidationError` for unknown filter values or an overlong
/// search term; `AppError::Database` when the store is unavailable.
#[instrument(skip(state, query), fields(
    page = ?query.page,
    limit = ?query.limit,
    has_search = query.search.is_some()
))]
pub async fn list_courses(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CourseListQuery>,
) -> Result<Json<PaginatedResponse<Course>>, AppError> {
    query.validate()?;

    let use_case = ListCoursesUseCase::new(state.course_repo.clone(), state.config.page_limits());
    let response = use_case.execute(&query).await?;

    info!(
        "Returned {} of {} courses (page {} of {})",
        response.data.len(),
        response.pagination.total_items,
        response.pagination.page,
        response.pagination.total_pages
    );
    Ok(Json(response))
}

/// `GET /api/v1/courses/{id}/reviews` - approved reviews, newest first.
#[instrument(skip(state, page))]
pub async fn get_course_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> Result<Json<PaginatedResponse<CourseReview>>, AppError> {
    let course_id = Uuid::parse_str(&id)
        .map_err(|_| AppError::BadRequest("Invalid course ID format".to_string()))?;

    let use_case =
        CourseReviewsUseCase::new(state.course_repo.clone(), state.config.page_limits());
    Ok(Json(use_case.execute(course_id, &page).await?))
}
