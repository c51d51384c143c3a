//! On-disk manifest formats.
//!
//! `catalog.toml` at the content root lists courses; each course directory
//! holds a `lessons.toml` listing its lessons and their body files.

use relative_path::RelativePathBuf;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogManifest {
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

/// A course entry in `catalog.toml`. `id` doubles as the course directory name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#64748b".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonManifest {
    #[serde(default)]
    pub lessons: Vec<LessonEntry>,
}

/// A lesson entry in a course's `lessons.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonEntry {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    /// Body file, relative to the course directory.
    pub file: RelativePathBuf,
}
