//! Upward search for the course root owning a path

use std::path::{Path, PathBuf};

use crate::core::error::{NavError, Result};
use crate::course::layout;

/// Find the nearest ancestor of `start` (inclusive) that is a course root.
///
/// Relative paths are made absolute against the working directory first so
/// the walk can reach the filesystem root. Reaching it without a match means
/// a zone or question was constructed outside any course, which callers treat
/// as fatal.
pub fn find_course_root(start: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(start).map_err(|e| NavError::io(start, e))?;

    let root = absolute
        .ancestors()
        .find(|dir| layout::is_course_root(dir))
        .map(Path::to_path_buf)
        .ok_or_else(|| NavError::CourseRootNotFound(absolute.clone()))?;

    tracing::debug!("course root of {} is {}", start.display(), root.display());
    Ok(root)
}
