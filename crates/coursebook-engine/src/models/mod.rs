pub mod catalog;
pub mod course;
pub mod lesson;
pub mod manifest;

pub use catalog::Catalog;
pub use course::Course;
pub use lesson::Lesson;
pub use manifest::{CatalogManifest, CourseEntry, LessonEntry, LessonManifest};
