use crate::{
    application::shared::dto::PageQuery,
    domain::{
        course::{entity::VideoWatchHistory, errors::DomainError, repository::CourseRepository},
        shared::pagination::{PageLimits, PaginatedResponse},
    },
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

pub struct WatchHistoryUseCase {
    repository: Arc<dyn CourseRepository>,
    limits: PageLimits,
}

impl WatchHistoryUseCase {
    pub fn new(repository: Arc<dyn CourseRepository>, limits: PageLimits) -> Self {
        Self { repository, limits }
    }

    #[instrument(skip(self, page))]
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: &PageQuery,
    ) -> Result<PaginatedResponse<VideoWatchHistory>, DomainError> {
        let params = page.resolve(&self.limits);
        let (history, total) = self
            .repository
            .find_watch_history(user_id, params.limit, params.offset())
            .await?;
        Ok(PaginatedResponse::new(history, params, total))
    }
}
