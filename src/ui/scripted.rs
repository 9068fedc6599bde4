//! Presenter that replays a fixed script of responses

use std::collections::VecDeque;

use crate::core::error::{NavError, Result};
use crate::nav::menu::{Choice, ChoiceId};
use crate::ui::Presenter;

/// One canned operator response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Choose the entry with exactly this label
    Pick(String),
    /// Dismiss the dialog
    Cancel,
    /// Answer with a raw id, whether or not the menu has it
    Raw(ChoiceId),
}

impl ScriptStep {
    pub fn pick(label: impl Into<String>) -> Self {
        ScriptStep::Pick(label.into())
    }
}

/// A menu as it was shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMenu {
    pub header: String,
    pub labels: Vec<String>,
    pub allow_cancel: bool,
}

#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    steps: VecDeque<ScriptStep>,
    shown: Vec<ShownMenu>,
    messages: Vec<(String, String)>,
}

impl ScriptedPresenter {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            shown: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Every menu presented so far, oldest first
    pub fn shown(&self) -> &[ShownMenu] {
        &self.shown
    }

    pub fn last_menu(&self) -> Option<&ShownMenu> {
        self.shown.last()
    }

    /// `(title, text)` of every message shown
    pub fn messages(&self) -> &[(String, String)] {
        &self.messages
    }

    /// Steps not yet consumed
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl Presenter for ScriptedPresenter {
    fn present_choice(
        &mut self,
        header: &str,
        choices: &[Choice],
        allow_cancel: bool,
    ) -> Result<Option<ChoiceId>> {
        self.shown.push(ShownMenu {
            header: header.to_string(),
            labels: choices.iter().map(|c| c.label.clone()).collect(),
            allow_cancel,
        });

        let step = self
            .steps
            .pop_front()
            .ok_or_else(|| NavError::Presenter("script exhausted".to_string()))?;

        match step {
            ScriptStep::Pick(label) => choices
                .iter()
                .find(|c| c.label == label)
                .map(|c| Some(c.id))
                .ok_or_else(|| NavError::Presenter(format!("no entry labeled '{}'", label))),
            ScriptStep::Cancel if allow_cancel => Ok(None),
            ScriptStep::Cancel => Err(NavError::Presenter("cancel not allowed".to_string())),
            ScriptStep::Raw(id) => Ok(Some(id)),
        }
    }

    fn show_message(&mut self, title: &str, text: &str) -> Result<()> {
        self.messages.push((title.to_string(), text.to_string()));
        Ok(())
    }
}
