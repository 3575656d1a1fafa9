pub mod course_reviews;
pub mod list_courses;
pub mod my_enrollments;
pub mod shared;
pub mod watch_history;
