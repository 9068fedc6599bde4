//! Presentation layer for choice dialogs
//!
//! Navigation only talks to [`Presenter`]. The terminal implementation draws
//! with ratatui; the scripted one replays canned responses for tests.

pub mod scripted;
pub mod state;
pub mod terminal;

pub use scripted::{ScriptStep, ScriptedPresenter, ShownMenu};
pub use state::DialogState;
pub use terminal::TerminalPresenter;

use crate::core::error::Result;
use crate::nav::menu::{Choice, ChoiceId};

/// Renders a labeled choice list and waits for the operator
pub trait Presenter {
    /// Show `choices` under `header` and block until the operator responds.
    ///
    /// Returns `Ok(None)` when the operator cancels (only possible when
    /// `allow_cancel` is set).
    fn present_choice(
        &mut self,
        header: &str,
        choices: &[Choice],
        allow_cancel: bool,
    ) -> Result<Option<ChoiceId>>;

    /// Show a message and wait for acknowledgement
    fn show_message(&mut self, title: &str, text: &str) -> Result<()>;
}
