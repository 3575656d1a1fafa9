use crate::{
    application::shared::dto::PageQuery,
    domain::{
        course::{entity::CourseReview, errors::DomainError, repository::CourseRepository},
        shared::pagination::{PageLimits, PaginatedResponse},
    },
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

pub struct CourseReviewsUseCase {
    repository: Arc<dyn CourseRepository>,
    limits: PageLimits,
}

impl CourseReviewsUseCase {
    pub fn new(repository: Arc<dyn CourseRepository>, limits: PageLimits) -> Self {
        Self { repository, limits }
    }

    /// Approved reviews of one course, newest first.
    #[instrument(skip(self, page))]
    pub async fn execute(
        &self,
        course_id: Uuid,
        page: &PageQuery,
    ) -> Result<PaginatedResponse<CourseReview>, DomainError> {
        if self.repository.find_by_id(course_id).await?.is_none() {
            return Err(DomainError::NotFound(format!("course {}", course_id)));
        }

        let params = page.resolve(&self.limits);
        let (reviews, total) = self
            .repository
            .find_approved_reviews(course_id, params.limit, params.offset())
            .await?;

        Ok(PaginatedResponse::new(reviews, params, total))
    }
}
