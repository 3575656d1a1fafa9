use crate::{
    application::shared::dto::PageQuery,
    domain::{
        course::{entity::EnrollmentWithCourse, errors::DomainError, repository::CourseRepository},
        shared::pagination::{PageLimits, PaginatedResponse},
    },
};
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

pub struct MyEnrollmentsUseCase {
    repository: Arc<dyn CourseRepository>,
    limits: PageLimits,
}

impl MyEnrollmentsUseCase {
    pub fn new(repository: Arc<dyn CourseRepository>, limits: PageLimits) -> Self {
        Self { repository, limits }
    }

    /// The user's enrollments, each joined with its course.
    ///
    /// Enrollments whose course cannot be loaded are left out of `data`;
    /// `total_items` still reports the stored enrollment count.
    #[instrument(skip(self, page))]
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: &PageQuery,
    ) -> Result<PaginatedResponse<EnrollmentWithCourse>, DomainError> {
        let params = page.resolve(&self.limits);
        let (enrollments, total) = self
            .repository
            .find_enrollments(user_id, params.limit, params.offset())
            .await?;

        let mut items = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            match self.repository.find_by_id(enrollment.course_id).await {
                Ok(Some(course)) => items.push(EnrollmentWithCourse { enrollment, course }),
                Ok(None) => {
                    warn!(course_id = %enrollment.course_id, "Enrolled course no longer exists");
                }
                Err(e) => {
                    warn!(course_id = %enrollment.course_id, error = %e, "Failed to load enrolled course");
                }
            }
        }

        Ok(PaginatedResponse::new(items, params, total))
    }
}
