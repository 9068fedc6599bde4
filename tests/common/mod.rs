//! On-disk course fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

pub fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// A course root inside a temp dir
pub struct CourseFixture {
    pub temp: TempDir,
    pub root: PathBuf,
}

impl CourseFixture {
    pub fn new(info: Value) -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("course");
        write_json(&root.join("infoCourse.json"), &info);
        Self { temp, root }
    }

    /// Course from the first end-to-end example
    pub fn intro() -> Self {
        Self::new(json!({"uuid": "u1", "name": "CS1", "title": "Intro"}))
    }

    pub fn instance(&self, id: &str, info: Value) -> PathBuf {
        let dir = self.root.join("courseInstances").join(id);
        write_json(&dir.join("infoCourseInstance.json"), &info);
        dir
    }

    /// `rel` is relative to the instance's `assessments/`
    pub fn assessment(&self, instance: &str, rel: &str, info: Value) -> PathBuf {
        let dir = self
            .root
            .join("courseInstances")
            .join(instance)
            .join("assessments")
            .join(rel);
        write_json(&dir.join("infoAssessment.json"), &info);
        dir
    }

    /// `rel` is relative to the course's `questions/`
    pub fn question(&self, rel: &str, title: &str) -> PathBuf {
        let dir = self.root.join("questions").join(rel);
        write_question(&dir, title);
        dir
    }
}

pub fn write_question(dir: &Path, title: &str) {
    write_json(&dir.join("info.json"), &json!({"uuid": format!("uuid-{}", title), "title": title}));
    fs::write(dir.join("question.html"), "<pl-question-panel></pl-question-panel>").unwrap();
}

pub fn homework(zones: Value) -> Value {
    json!({
        "uuid": "a1",
        "type": "Homework",
        "set": "HW",
        "number": "1",
        "title": "Basics",
        "zones": zones
    })
}
