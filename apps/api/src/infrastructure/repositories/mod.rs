pub mod sqlx_course_repository;
