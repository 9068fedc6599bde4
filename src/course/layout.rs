//! On-disk layout of a course tree

use std::path::Path;

/// Descriptor marking a course root
pub const COURSE_MARKER: &str = "infoCourse.json";
/// Descriptor marking a course instance directory
pub const INSTANCE_MARKER: &str = "infoCourseInstance.json";
/// Descriptor marking an assessment directory
pub const ASSESSMENT_MARKER: &str = "infoAssessment.json";
/// Question descriptor; only valid alongside [`QUESTION_HTML`]
pub const QUESTION_MARKER: &str = "info.json";
pub const QUESTION_HTML: &str = "question.html";

pub const INSTANCES_DIR: &str = "courseInstances";
pub const ASSESSMENTS_DIR: &str = "assessments";
pub const QUESTIONS_DIR: &str = "questions";

pub fn is_course_root(dir: &Path) -> bool {
    dir.join(COURSE_MARKER).is_file()
}

pub fn is_instance_dir(dir: &Path) -> bool {
    dir.join(INSTANCE_MARKER).is_file()
}

pub fn is_assessment_dir(dir: &Path) -> bool {
    dir.join(ASSESSMENT_MARKER).is_file()
}

/// Both `question.html` and `info.json` must be present
pub fn is_question_dir(dir: &Path) -> bool {
    dir.join(QUESTION_HTML).is_file() && dir.join(QUESTION_MARKER).is_file()
}
