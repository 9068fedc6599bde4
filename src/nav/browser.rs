//! Plain directory browsing until a course root is chosen

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::NavigatorConfig;
use crate::core::error::{NavError, Result};
use crate::course::layout;
use crate::nav::menu::{ChoiceStyle, Menu, Selection};
use crate::nav::ordering::order_by_label;
use crate::ui::Presenter;

/// Result of a browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The operator selected this course root
    Selected(PathBuf),
    Cancelled,
    Exited,
}

pub struct FilesystemBrowser<'a, P: Presenter + ?Sized> {
    presenter: &'a mut P,
    config: &'a NavigatorConfig,
    current: PathBuf,
}

impl<'a, P: Presenter + ?Sized> FilesystemBrowser<'a, P> {
    /// Start browsing at `start`, which is resolved to a canonical path so
    /// the parent entry always leads somewhere.
    pub fn new(presenter: &'a mut P, config: &'a NavigatorConfig, start: &Path) -> Result<Self> {
        let current = fs::canonicalize(start).map_err(|e| NavError::io(start, e))?;
        Ok(Self {
            presenter,
            config,
            current,
        })
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Visible, listable subdirectories of the current path, by name.
    ///
    /// Anything that can't be read is left out without complaint.
    pub fn subdirectories(&self) -> Vec<(PathBuf, String)> {
        let entries = match fs::read_dir(&self.current) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("Cannot list {}: {}", self.current.display(), err);
                return Vec::new();
            }
        };

        let mut dirs = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.show_hidden && name.starts_with('.') {
                continue;
            }

            if let Err(err) = fs::read_dir(&path) {
                tracing::debug!("Skipping inaccessible {}: {}", path.display(), err);
                continue;
            }
            dirs.push((path, name));
        }

        order_by_label(dirs)
    }

    pub fn build_menu(&self) -> Menu<PathBuf> {
        let mut menu = Menu::new(format!("Current Path: {}", self.current.display()));
        if self.current.parent().is_some() {
            menu = menu.with_parent();
        }
        if layout::is_course_root(&self.current) {
            menu = menu.with_select_course();
        }

        for (path, name) in self.subdirectories() {
            let style = if layout::is_course_root(&path) {
                ChoiceStyle::Highlight
            } else {
                ChoiceStyle::Plain
            };
            menu.push_child(path, name, style);
        }
        menu.with_exit()
    }

    /// Loop until a course is selected, browsing is cancelled, or exit is chosen
    pub fn browse(&mut self) -> Result<BrowseOutcome> {
        loop {
            let menu = self.build_menu();
            let response = self
                .presenter
                .present_choice(menu.header(), &menu.choices(), true)?;

            match menu.decode(response)? {
                Selection::Parent => {
                    if let Some(parent) = self.current.parent() {
                        self.current = parent.to_path_buf();
                    }
                }
                Selection::SelectCourse => {
                    tracing::info!("Selected course {}", self.current.display());
                    return Ok(BrowseOutcome::Selected(self.current.clone()));
                }
                Selection::Child(path) => self.current = path,
                Selection::Cancelled => return Ok(BrowseOutcome::Cancelled),
                Selection::Exit => return Ok(BrowseOutcome::Exited),
            }
        }
    }
}
