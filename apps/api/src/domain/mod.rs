pub mod course;
pub mod shared;
