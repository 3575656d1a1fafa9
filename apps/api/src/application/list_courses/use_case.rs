use super::dto::CourseListQuery;
use crate::domain::{
    course::{entity::Course, errors::DomainError, repository::CourseRepository},
    shared::pagination::{PageLimits, PaginatedResponse},
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ListCoursesUseCase {
    repository: Arc<dyn CourseRepository>,
    limits: PageLimits,
}

impl ListCoursesUseCase {
    pub fn new(repository: Arc<dyn CourseRepository>, limits: PageLimits) -> Self {
        Self { repository, limits }
    }

    /// Published courses matching `query`, one page at a time.
    ///
    /// `query` is expected to have passed validation already.
    #[instrument(skip(self, query))]
    pub async fn execute(
        &self,
        query: &CourseListQuery,
    ) -> Result<PaginatedResponse<Course>, DomainError> {
        let params = query.page_query().resolve(&self.limits);
        let filter = query.filter();

        let (courses, total) = self
            .repository
            .find_published(&filter, params.limit, params.offset())
            .await?;

        debug!(
            page = params.page,
            limit = params.limit,
            total,
            returned = courses.len(),
            "Listed courses"
        );
        Ok(PaginatedResponse::new(courses, params, total))
    }
}
