use crate::{config::Config, domain::course::repository::CourseRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub course_repo: Arc<dyn CourseRepository>,
}
