//! Interactive navigation: directory browsing, then course traversal

pub mod browser;
pub mod controller;
pub mod menu;
pub mod ordering;

pub use browser::{BrowseOutcome, FilesystemBrowser};
pub use controller::{NavOutcome, NavigationController, Phase, View};
pub use menu::{Choice, ChoiceId, ChoiceStyle, Menu, Selection};
pub use ordering::order_by_label;
