use std::path::PathBuf;

use thiserror::Error;

use crate::nav::menu::ChoiceId;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Invalid {kind} path: {path} (missing {marker})")]
    MissingMarker {
        kind: &'static str,
        path: PathBuf,
        marker: &'static str,
    },

    #[error("No course root above {0}")]
    CourseRootNotFound(PathBuf),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed descriptor {path}: {source}")]
    Descriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Zone {index} no longer exists in {assessment}")]
    ZoneMissing { assessment: PathBuf, index: usize },

    #[error("Zone {zone} of {assessment} has a question entry without an id")]
    QuestionRef { assessment: PathBuf, zone: usize },

    #[error("Zone {zone} of {assessment} names question '{id}' outside the course questions directory")]
    QuestionOutsideCourse {
        assessment: PathBuf,
        zone: usize,
        id: String,
    },

    #[error("Selection {0:?} matches no menu entry")]
    UnknownSelection(ChoiceId),

    #[error("Control entry '{0}' is not valid here")]
    UnexpectedControl(&'static str),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Presenter error: {0}")]
    Presenter(String),
}

impl NavError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NavError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
