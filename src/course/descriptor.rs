//! JSON descriptors backing each node kind
//!
//! Only the fields needed for identity, titles and navigation are typed.
//! Everything else in a descriptor is still shown through
//! [`describe_fields`], which works on the raw JSON.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{NavError, Result};

/// `infoCourse.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    pub title: String,
    /// Topic records are free-form across course generations
    #[serde(default)]
    pub topics: Vec<Value>,
}

/// `infoCourseInstance.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstanceInfo {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub hide_in_enroll_page: Option<bool>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub allow_access: Vec<AccessRule>,
}

/// One `allowAccess` entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub uids: Vec<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub credit: Option<u32>,
}

/// `infoAssessment.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInfo {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub set: String,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub shuffle_questions: Option<bool>,
    #[serde(default)]
    pub allow_real_time_grading: Option<bool>,
    #[serde(default)]
    pub zones: Vec<ZoneInfo>,
}

/// One entry of an assessment's `zones` array
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionRef>,
}

/// A zone's reference to a question, either direct or through alternatives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<QuestionRef>,
}

impl QuestionRef {
    /// Flatten into question ids in order; `None` if an entry has no id at all
    pub fn ids(&self) -> Option<Vec<String>> {
        if let Some(id) = &self.id {
            return Some(vec![id.clone()]);
        }
        if self.alternatives.is_empty() {
            return None;
        }
        let mut ids = Vec::new();
        for alternative in &self.alternatives {
            ids.extend(alternative.ids()?);
        }
        Some(ids)
    }
}

/// Question `info.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInfo {
    #[serde(default)]
    pub uuid: Option<String>,
    pub title: String,
}

/// Read a descriptor file as raw JSON.
///
/// The file is opened, read and closed within this call.
pub fn load_raw(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| NavError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| NavError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode a typed descriptor
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    decode(path, load_raw(path)?)
}

pub(crate) fn decode<T: DeserializeOwned>(path: &Path, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| NavError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the top-level fields of a JSON object as `- key: value` lines.
///
/// Keys come out sorted; string values are shown bare, everything else as
/// compact JSON.
pub fn describe_fields(value: &Value) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return vec![format!("- {}", value)];
    };

    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort();

    keys.into_iter()
        .map(|key| match &object[key] {
            Value::String(s) => format!("- {}: {}", key, s),
            other => format!("- {}: {}", key, other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_info_parses_minimal() {
        let info: CourseInfo =
            serde_json::from_value(json!({"uuid": "u1", "name": "CS1", "title": "Intro"})).unwrap();
        assert_eq!(info.name, "CS1");
        assert!(info.topics.is_empty());
    }

    #[test]
    fn test_assessment_type_field() {
        let info: AssessmentInfo = serde_json::from_value(json!({
            "type": "Homework", "set": "HW", "number": "1", "title": "Basics",
            "zones": [{"title": "Z1", "questions": [{"id": "q1"}]}]
        }))
        .unwrap();
        assert_eq!(info.kind.as_deref(), Some("Homework"));
        assert_eq!(info.zones.len(), 1);
        assert_eq!(info.zones[0].questions[0].ids(), Some(vec!["q1".to_string()]));
    }

    #[test]
    fn test_alternatives_flatten_in_order() {
        let entry: QuestionRef = serde_json::from_value(json!({
            "alternatives": [{"id": "a"}, {"id": "b"}]
        }))
        .unwrap();
        assert_eq!(entry.ids(), Some(vec!["a".to_string(), "b".to_string()]));

        let empty = QuestionRef::default();
        assert_eq!(empty.ids(), None);
    }

    #[test]
    fn test_describe_fields_sorted() {
        let lines = describe_fields(&json!({"title": "Intro", "name": "CS1", "topics": []}));
        assert_eq!(lines, vec!["- name: CS1", "- title: Intro", "- topics: []"]);
    }
}
