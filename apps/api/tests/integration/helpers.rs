use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use course_service::{
    config::Config,
    domain::course::{
        entity::{Course, CourseEnrollment, CourseReview, VideoWatchHistory},
        errors::DomainError,
        repository::CourseRepository,
        value_objects::CourseFilter,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-jwt-secret";

/// Store double that applies the same filtering, ordering and slicing as
/// the SQL repository.
#[derive(Default, Clone)]
pub struct InMemoryCourseRepository {
    pub healthy: bool,
    pub courses: Vec<Course>,
    pub reviews: Vec<CourseReview>,
    pub history: Vec<VideoWatchHistory>,
    pub enrollments: Vec<CourseEnrollment>,
}

fn slice<T: Clone>(items: Vec<T>, limit: i64, offset: i64) -> (Vec<T>, i64) {
    let total = items.len() as i64;
    let page = items
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect();
    (page, total)
}

fn matches_filter(filter: &CourseFilter, course: &Course) -> bool {
    let in_list = |list: &Vec<String>, value: &str| list.is_empty() || list.iter().any(|v| v == value);
    let search_hit = filter.search.as_ref().is_none_or(|s| {
        let needle = s.to_lowercase();
        course.title.to_lowercase().contains(&needle)
            || course
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    });

    course.status == "published"
        && in_list(&filter.skill_types, &course.skill_type)
        && in_list(&filter.levels, &course.level)
        && in_list(&filter.enrollment_types, &course.enrollment_type)
        && filter.is_featured.is_none_or(|f| course.is_featured == f)
        && search_hit
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn ping(&self) -> Result<(), DomainError> {
        if self.healthy {
            Ok(())
        } else {
            Err(DomainError::InfrastructureError("database down".into()))
        }
    }

    async fn find_published(
        &self,
        filter: &CourseFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Course>, i64), DomainError> {
        let mut found: Vec<Course> = self
            .courses
            .iter()
            .filter(|c| matches_filter(filter, c))
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(slice(found, limit, offset))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DomainError> {
        Ok(self.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn find_approved_reviews(
        &self,
        course_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CourseReview>, i64), DomainError> {
        let mut found: Vec<CourseReview> = self
            .reviews
            .iter()
            .filter(|r| r.course_id == course_id && r.is_approved)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(slice(found, limit, offset))
    }

    async fn find_watch_history(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<VideoWatchHistory>, i64), DomainError> {
        let mut found: Vec<VideoWatchHistory> = self
            .history
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
        Ok(slice(found, limit, offset))
    }

    async fn find_enrollments(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CourseEnrollment>, i64), DomainError> {
        let mut found: Vec<CourseEnrollment> = self
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.enrollment_date.cmp(&a.enrollment_date));
        Ok(slice(found, limit, offset))
    }
}

pub fn build_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: JWT_SECRET.to_string(),
        pagination_default_limit: 20,
        pagination_max_limit: 100,
        ignore_missing_migrations: true,
    }
}

pub fn spawn_app(repo: InMemoryCourseRepository) -> Router {
    let state = AppState {
        config: build_config(),
        course_repo: Arc::new(repo),
    };
    create_router(state)
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn get_as(app: &Router, uri: &str, token: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub fn assert_status(status: StatusCode, expected: StatusCode) {
    assert_eq!(status, expected, "expected {}, got {}", expected, status);
}

pub fn token_for(user_id: Uuid) -> String {
    let claims = json!({
        "sub": user_id.to_string(),
        "email": "learner@example.com",
        "role": "student",
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to sign token")
}

/// Published free reading course; `age_minutes` pushes `created_at` back.
pub fn course(title: &str, age_minutes: i64) -> Course {
    let created = Utc::now() - Duration::minutes(age_minutes);
    Course {
        id: Uuid::now_v7(),
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: Some(format!("{} for IELTS candidates", title)),
        short_description: None,
        skill_type: "reading".to_string(),
        level: "beginner".to_string(),
        target_band_score: Some(6.5),
        thumbnail_url: None,
        preview_video_url: None,
        instructor_id: Uuid::now_v7(),
        instructor_name: Some("Instructor".to_string()),
        duration_hours: Some(12.0),
        total_lessons: 10,
        total_videos: 10,
        enrollment_type: "free".to_string(),
        price: 0.0,
        currency: "VND".to_string(),
        status: "published".to_string(),
        is_featured: false,
        is_recommended: false,
        total_enrollments: 0,
        average_rating: 0.0,
        total_reviews: 0,
        display_order: 0,
        published_at: Some(created),
        created_at: created,
        updated_at: created,
    }
}

pub fn review(course_id: Uuid, rating: i32, age_minutes: i64, approved: bool) -> CourseReview {
    let created = Utc::now() - Duration::minutes(age_minutes);
    CourseReview {
        id: Uuid::now_v7(),
        user_id: Uuid::now_v7(),
        course_id,
        rating,
        title: None,
        comment: Some("Clear explanations".to_string()),
        helpful_count: 0,
        is_approved: approved,
        approved_by: None,
        approved_at: None,
        created_at: created,
        updated_at: created,
    }
}

pub fn watch_record(user_id: Uuid, age_minutes: i64) -> VideoWatchHistory {
    VideoWatchHistory {
        id: Uuid::now_v7(),
        user_id,
        video_id: Uuid::now_v7(),
        lesson_id: Uuid::now_v7(),
        watched_seconds: 300,
        total_seconds: 600,
        watch_percentage: 50.0,
        session_id: None,
        device_type: Some("web".to_string()),
        watched_at: Utc::now() - Duration::minutes(age_minutes),
    }
}

pub fn enrollment(user_id: Uuid, course_id: Uuid, age_minutes: i64) -> CourseEnrollment {
    let enrolled = Utc::now() - Duration::minutes(age_minutes);
    CourseEnrollment {
        id: Uuid::now_v7(),
        user_id,
        course_id,
        enrollment_date: enrolled,
        enrollment_type: "free".to_string(),
        payment_id: None,
        amount_paid: None,
        currency: None,
        progress_percentage: 0.0,
        lessons_completed: 0,
        total_time_spent_minutes: 0,
        status: "active".to_string(),
        completed_at: None,
        certificate_issued: false,
        certificate_url: None,
        expires_at: None,
        last_accessed_at: None,
        created_at: enrolled,
        updated_at: enrolled,
    }
}
