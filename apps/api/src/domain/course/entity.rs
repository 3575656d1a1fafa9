use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Catalog course as listed to learners.
///
/// `total_lessons` is derived from the lessons table at query time rather
/// than read from a stored counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    /// listening, reading, writing, speaking, general
    pub skill_type: String,
    /// beginner, intermediate, advanced
    pub level: String,
    pub target_band_score: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub preview_video_url: Option<String>,
    pub instructor_id: Uuid,
    pub instructor_name: Option<String>,
    pub duration_hours: Option<f64>,
    pub total_lessons: i32,
    pub total_videos: i32,
    /// free, premium, subscription
    pub enrollment_type: String,
    pub price: f64,
    pub currency: String,
    /// draft, published, archived
    pub status: String,
    pub is_featured: bool,
    pub is_recommended: bool,
    pub total_enrollments: i32,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub display_order: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct CourseReview {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub helpful_count: i32,
    pub is_approved: bool,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One viewing session of a lesson video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct VideoWatchHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub video_id: Uuid,
    pub lesson_id: Uuid,
    pub watched_seconds: i32,
    pub total_seconds: i32,
    pub watch_percentage: f64,
    pub session_id: Option<String>,
    pub device_type: Option<String>,
    pub watched_at: DateTime<Utc>,
}

/// A learner's enrollment in a course.
///
/// `progress_percentage`, `lessons_completed` and `total_time_spent_minutes`
/// are aggregated from lesson progress when the enrollment is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct CourseEnrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrollment_date: DateTime<Utc>,
    /// free, purchased, subscription
    pub enrollment_type: String,
    pub payment_id: Option<Uuid>,
    pub amount_paid: Option<f64>,
    pub currency: Option<String>,
    pub progress_percentage: f64,
    pub lessons_completed: i32,
    pub total_time_spent_minutes: i32,
    /// active, completed, expired, cancelled
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub certificate_issued: bool,
    pub certificate_url: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EnrollmentWithCourse {
    pub enrollment: CourseEnrollment,
    pub course: Course,
}
