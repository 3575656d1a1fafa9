use crate::domain::course::{
    entity::{Course, CourseEnrollment, CourseReview, VideoWatchHistory},
    errors::DomainError,
    repository::CourseRepository,
    value_objects::CourseFilter,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const COURSE_COLUMNS: &str = "c.id, c.title, c.slug, c.description, c.short_description,
        c.skill_type, c.level, c.target_band_score::float8 AS target_band_score,
        c.thumbnail_url, c.preview_video_url, c.instructor_id, c.instructor_name,
        c.duration_hours::float8 AS duration_hours,
        (SELECT COUNT(*) FROM lessons l WHERE l.course_id = c.id)::int4 AS total_lessons,
        c.total_videos, c.enrollment_type, c.price::float8 AS price, c.currency, c.status,
        c.is_featured, c.is_recommended, c.total_enrollments,
        c.average_rating::float8 AS average_rating, c.total_reviews, c.display_order,
        c.published_at, c.created_at, c.updated_at";

/// Applies the published-only base condition plus the optional filters.
fn apply_course_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &CourseFilter) {
    qb.push(" WHERE c.status = 'published'");

    if !filter.skill_types.is_empty() {
        qb.push(" AND c.skill_type = ANY(")
            .push_bind(filter.skill_types.clone())
            .push(")");
    }
    if !filter.levels.is_empty() {
        qb.push(" AND c.level = ANY(")
            .push_bind(filter.levels.clone())
            .push(")");
    }
    if !filter.enrollment_types.is_empty() {
        qb.push(" AND c.enrollment_type = ANY(")
            .push_bind(filter.enrollment_types.clone())
            .push(")");
    }
    if let Some(featured) = filter.is_featured {
        qb.push(" AND c.is_featured = ").push_bind(featured);
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        qb.push(" AND (c.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR c.description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

fn infrastructure_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("{}: {}", context, e);
    DomainError::InfrastructureError(format!("{}: {}", context, e))
}

pub struct SqlxCourseRepository {
    pool: PgPool,
}

impl SqlxCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCourseRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqlxCourseRepository {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure_error("Database unreachable", e))?;
        Ok(())
    }

    #[instrument(skip(self, filter), fields(has_filters = !filter.is_empty()))]
    async fn find_published(
        &self,
        filter: &CourseFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Course>, i64), DomainError> {
        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*)::bigint FROM courses c");
        apply_course_filters(&mut count_qb, filter);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| infrastructure_error("Course count query failed", e))?;

        let mut data_qb = QueryBuilder::<Postgres>::new("SELECT ");
        data_qb.push(COURSE_COLUMNS).push(" FROM courses c");
        apply_course_filters(&mut data_qb, filter);
        data_qb
            .push(" ORDER BY c.display_order ASC, c.created_at DESC")
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let courses: Vec<Course> = data_qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure_error("Course data query failed", e))?;

        debug!("Retrieved {} of {} published courses", courses.len(), total);
        Ok((courses, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT ");
        qb.push(COURSE_COLUMNS)
            .push(" FROM courses c WHERE c.id = ")
            .push_bind(id);

        qb.build_query_as::<Course>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| infrastructure_error("Course lookup failed", e))
    }

    #[instrument(skip(self))]
    async fn find_approved_reviews(
        &self,
        course_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CourseReview>, i64), DomainError> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM course_reviews WHERE course_id = $1 AND is_approved = true",
        )
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| infrastructure_error("Review count query failed", e))?;

        let reviews = sqlx::query_as::<_, CourseReview>(
            "SELECT id, user_id, course_id, rating, title, comment, helpful_count,
                    is_approved, approved_by, approved_at, created_at, updated_at
             FROM course_reviews
             WHERE course_id = $1 AND is_approved = true
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(course_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure_error("Review data query failed", e))?;

        Ok((reviews, total))
    }

    #[instrument(skip(self))]
    async fn find_watch_history(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<VideoWatchHistory>, i64), DomainError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM video_watch_history WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| infrastructure_error("Watch history count query failed", e))?;

        let history = sqlx::query_as::<_, VideoWatchHistory>(
            "SELECT id, user_id, video_id, lesson_id, watched_seconds, total_seconds,
                    watch_percentage::float8 AS watch_percentage, session_id, device_type,
                    watched_at
             FROM video_watch_history
             WHERE user_id = $1
             ORDER BY watched_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure_error("Watch history data query failed", e))?;

        Ok((history, total))
    }

    // Progress figures are aggregated over every lesson of the course, so
    // lessons the user never opened count as 0%.
    #[instrument(skip(self))]
    async fn find_enrollments(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CourseEnrollment>, i64), DomainError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM course_enrollments WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| infrastructure_error("Enrollment count query failed", e))?;

        let enrollments = sqlx::query_as::<_, CourseEnrollment>(
            "SELECT e.id, e.user_id, e.course_id, e.enrollment_date, e.enrollment_type,
                    e.payment_id, e.amount_paid::float8 AS amount_paid, e.currency,
                    COALESCE(ROUND(
                        (SUM(COALESCE(lp.progress_percentage, 0)) / NULLIF(COUNT(l.id), 0))::numeric, 2
                    ), 0)::float8 AS progress_percentage,
                    (COUNT(lp.id) FILTER (WHERE lp.status = 'completed'))::int4 AS lessons_completed,
                    COALESCE(SUM(ROUND(lp.last_position_seconds / 60.0)), 0)::int4
                        AS total_time_spent_minutes,
                    e.status, e.completed_at, e.certificate_issued, e.certificate_url,
                    e.expires_at, e.last_accessed_at, e.created_at, e.updated_at
             FROM course_enrollments e
             LEFT JOIN lessons l ON l.course_id = e.course_id
             LEFT JOIN lesson_progress lp ON lp.lesson_id = l.id AND lp.user_id = e.user_id
             WHERE e.user_id = $1
             GROUP BY e.id
             ORDER BY e.enrollment_date DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure_error("Enrollment data query failed", e))?;

        Ok((enrollments, total))
    }
}
