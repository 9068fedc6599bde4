//! Session flow: pick a course (directly or by browsing), then navigate it

use std::path::PathBuf;

use crate::core::config::NavigatorConfig;
use crate::core::error::{NavError, Result};
use crate::course::{layout, Course, Node};
use crate::nav::{BrowseOutcome, FilesystemBrowser, NavOutcome, NavigationController};
use crate::ui::Presenter;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOutcome {
    /// Browsing was cancelled before a course was chosen
    NoCourse,
    /// The operator backed out of the course's top level
    Finished,
    /// The exit entry was chosen
    Exited,
}

/// Validate the optional start argument without touching anything else
pub fn resolve_start(arg: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match arg {
        None => Ok(None),
        Some(path) if path.is_dir() => Ok(Some(path)),
        Some(path) => Err(NavError::DirectoryNotFound(path)),
    }
}

/// Run a whole session against `presenter`.
///
/// A start directory that is a course root is navigated directly; any other
/// start (or none, meaning the working directory) is browsed first.
pub fn run<P: Presenter + ?Sized>(
    start: Option<PathBuf>,
    presenter: &mut P,
    config: &NavigatorConfig,
) -> Result<AppOutcome> {
    let course_root = match start {
        Some(dir) if layout::is_course_root(&dir) => dir,
        other => {
            let from = match other {
                Some(dir) => dir,
                None => {
                    if config.welcome {
                        presenter.show_message(&config.title, &config.welcome_text())?;
                    }
                    std::env::current_dir().map_err(|e| NavError::io(".", e))?
                }
            };

            match FilesystemBrowser::new(&mut *presenter, config, &from)?.browse()? {
                BrowseOutcome::Selected(root) => root,
                BrowseOutcome::Cancelled => return Ok(AppOutcome::NoCourse),
                BrowseOutcome::Exited => return Ok(AppOutcome::Exited),
            }
        }
    };

    let course = Course::open(course_root)?;
    tracing::info!("Navigating course at {}", course.path().display());

    let outcome = NavigationController::new(presenter, Node::Course(course)).run()?;
    Ok(match outcome {
        NavOutcome::Finished => AppOutcome::Finished,
        NavOutcome::Exited => AppOutcome::Exited,
    })
}
