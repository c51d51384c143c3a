use crate::models::{
    Catalog, CatalogManifest, Course, CourseEntry, Lesson, LessonEntry, LessonManifest,
};
use relative_path::{Component, RelativePath};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog manifest at the root of a content directory.
pub const CATALOG_FILE: &str = "catalog.toml";
/// Lesson manifest inside each course directory.
pub const LESSONS_FILE: &str = "lessons.toml";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Duplicate course id: {0}")]
    DuplicateCourse(String),
    #[error("Duplicate lesson id {lesson} in course {course}")]
    DuplicateLesson { course: String, lesson: u32 },
    #[error("Course {0} has no lessons")]
    EmptyCourse(String),
    #[error("Course id {0:?} is not a plain directory name")]
    InvalidCourseId(String),
    #[error("Lesson file {file} escapes course {course}")]
    OutsideCourse { course: String, file: String },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

pub fn validate_content_dir(path: &Path) -> Result<(), CatalogError> {
    if !path.exists() || !path.is_dir() {
        return Err(CatalogError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }
    if !path.join(CATALOG_FILE).is_file() {
        return Err(CatalogError::InvalidContentDir(format!(
            "{CATALOG_FILE} not found in {}",
            path.display()
        )));
    }
    Ok(())
}

/// Load every course listed in `catalog.toml`, with lesson bodies, in
/// catalog order.
pub fn load_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    validate_content_dir(root)?;
    let manifest: CatalogManifest = read_toml(&root.join(CATALOG_FILE))?;

    let mut seen = HashSet::new();
    let mut courses = Vec::with_capacity(manifest.courses.len());
    for entry in &manifest.courses {
        if !seen.insert(entry.id.as_str()) {
            return Err(CatalogError::DuplicateCourse(entry.id.clone()));
        }
        courses.push(load_course(root, entry)?);
    }

    if courses.is_empty() {
        log::warn!("Catalog at {} lists no courses", root.display());
    }
    Ok(Catalog { courses })
}

/// Load one course's lesson manifest and every lesson body it names.
pub fn load_course(root: &Path, entry: &CourseEntry) -> Result<Course, CatalogError> {
    let course_dir = course_dir(root, &entry.id)?;
    let manifest: LessonManifest = read_toml(&course_dir.join(LESSONS_FILE))?;
    if manifest.lessons.is_empty() {
        return Err(CatalogError::EmptyCourse(entry.id.clone()));
    }

    let mut seen = HashSet::new();
    let mut lessons = Vec::with_capacity(manifest.lessons.len());
    for lesson in &manifest.lessons {
        if !seen.insert(lesson.id) {
            return Err(CatalogError::DuplicateLesson {
                course: entry.id.clone(),
                lesson: lesson.id,
            });
        }
        lessons.push(load_lesson(&course_dir, &entry.id, lesson)?);
    }

    log::debug!("Loaded course {} with {} lessons", entry.id, lessons.len());
    Ok(Course {
        id: entry.id.clone(),
        name: entry.name.clone(),
        icon: entry.icon.clone(),
        description: entry.description.clone(),
        color: entry.color.clone(),
        lessons,
    })
}

fn load_lesson(course_dir: &Path, course: &str, entry: &LessonEntry) -> Result<Lesson, CatalogError> {
    let content = read_lesson_body(course_dir, course, &entry.file)?;
    if content.trim().is_empty() {
        log::warn!("Lesson {} in course {} has an empty body", entry.id, course);
    }
    Ok(Lesson {
        id: entry.id,
        title: entry.title.clone(),
        desc: entry.desc.clone(),
        content,
    })
}

/// Read a lesson body file, relative to its course directory.
pub fn read_lesson_body(
    course_dir: &Path,
    course: &str,
    file: &RelativePath,
) -> Result<String, CatalogError> {
    let normalized = file.normalize();
    if normalized.as_str().is_empty()
        || matches!(normalized.components().next(), Some(Component::ParentDir))
    {
        return Err(CatalogError::OutsideCourse {
            course: course.to_string(),
            file: file.to_string(),
        });
    }
    read_text(&normalized.to_path(course_dir))
}

fn course_dir(root: &Path, id: &str) -> Result<PathBuf, CatalogError> {
    let mut components = RelativePath::new(id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == id => Ok(root.join(id)),
        _ => Err(CatalogError::InvalidCourseId(id.to_string())),
    }
}

fn read_text(path: &Path) -> Result<String, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let text = read_text(path)?;
    toml::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
