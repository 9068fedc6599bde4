//! Navigator configuration
//!
//! The process surface takes no flags or environment variables, so these
//! values only vary when the library is embedded or driven from tests.

/// Configuration for browsing and navigation
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Title shown on every dialog
    pub title: String,

    /// Whether the directory browser lists dot-directories
    ///
    /// Hidden directories are never course content, so they are left out
    /// unless explicitly requested.
    pub show_hidden: bool,

    /// Whether a welcome message is shown before browsing starts
    ///
    /// Skipped when the operator passes a course root directly.
    pub welcome: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            title: format!("PrairieLearn Navigator v{}", env!("CARGO_PKG_VERSION")),
            show_hidden: false,
            welcome: true,
        }
    }
}

impl NavigatorConfig {
    /// Text of the welcome message
    pub fn welcome_text(&self) -> String {
        format!(
            "Welcome to {}!\n\nBrowse to a course directory and select it to explore its \
             instances, assessments, zones and questions.",
            self.title
        )
    }
}
