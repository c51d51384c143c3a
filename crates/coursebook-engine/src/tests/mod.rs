use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an empty temporary content directory
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write a file below the content directory, creating parent directories
pub fn create_test_file(content_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A content directory with one two-lesson course, `mongodb`.
pub fn create_sample_catalog() -> TempDir {
    let dir = create_test_content_dir();
    create_test_file(
        &dir,
        "catalog.toml",
        r##"
[[courses]]
id = "mongodb"
name = "MongoDB"
icon = "🍃"
description = "Foundation Course"
color = "#22c55e"
"##,
    );
    create_test_file(
        &dir,
        "mongodb/lessons.toml",
        r#"
[[lessons]]
id = 1
title = "Data Modeling"
desc = "Embedding vs Referencing"
file = "01-data-modeling.md"

[[lessons]]
id = 2
title = "Indexes"
desc = "ESR Rule"
file = "02-indexes.md"
"#,
    );
    create_test_file(
        &dir,
        "mongodb/01-data-modeling.md",
        "\n## Nguyên tắc vàng\n\n- embed\n- reference\n",
    );
    create_test_file(&dir, "mongodb/02-indexes.md", "## ESR\n\n`{ a: 1 }`\n");
    dir
}
