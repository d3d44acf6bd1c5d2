#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Write a declaration file into `dir` and return its path.
pub fn write_declarations(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A small declaration set used across suites: one collection of objects,
/// one scalar, one enumerated collection.
pub const SAMPLE_DECLARATIONS: &str = r#"
name: calendar
classes:
  - name: Foo
    properties:
      - name: eventDates
        type: DateTimeInterface
        collection: true
  - name: Article
    properties:
      - name: title
        type: string
        nullable: true
      - name: statuses
        enum: [draft, published]
        collection: true
"#;
