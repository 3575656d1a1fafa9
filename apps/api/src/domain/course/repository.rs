use super::entity::{Course, CourseEnrollment, CourseReview, VideoWatchHistory};
use super::errors::DomainError;
use super::value_objects::CourseFilter;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to the course catalog.
///
/// Paged finders return the requested slice together with the total number
/// of matching rows, counted independently of `limit`/`offset`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
    async fn find_published(
        &self,
        filter: &CourseFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Course>, i64), DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DomainError>;
    async fn find_approved_reviews(
        &self,
        course_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CourseReview>, i64), DomainError>;
    async fn find_watch_history(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<VideoWatchHistory>, i64), DomainError>;
    async fn find_enrollments(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CourseEnrollment>, i64), DomainError>;
}
