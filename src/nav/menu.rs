//! Choice lists and the tagged selection decoded from them

use crate::core::error::{NavError, Result};

pub const PARENT_LABEL: &str = ".. (Parent Folder)";
pub const SELECT_COURSE_LABEL: &str = "--- Select This Course ---";
pub const EXIT_LABEL: &str = "--- Exit ---";

/// Opaque handle the presenter hands back for the chosen entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceId(pub usize);

/// Presentation hint; the presenter decides what it looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStyle {
    Plain,
    Control,
    Highlight,
}

/// One entry as handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub label: String,
    pub style: ChoiceStyle,
}

/// What the operator picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Parent,
    SelectCourse,
    Child(T),
    Exit,
    Cancelled,
}

struct Entry<T> {
    label: String,
    style: ChoiceStyle,
    selection: Selection<T>,
}

/// A header plus entries in fixed order: parent, select-course, children, exit
pub struct Menu<T> {
    header: String,
    leading: Vec<Entry<T>>,
    children: Vec<Entry<T>>,
    exit: bool,
}

impl<T> Menu<T> {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            leading: Vec::new(),
            children: Vec::new(),
            exit: false,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn with_parent(mut self) -> Self {
        self.leading.push(Entry {
            label: PARENT_LABEL.to_string(),
            style: ChoiceStyle::Control,
            selection: Selection::Parent,
        });
        self
    }

    pub fn with_select_course(mut self) -> Self {
        self.leading.push(Entry {
            label: SELECT_COURSE_LABEL.to_string(),
            style: ChoiceStyle::Highlight,
            selection: Selection::SelectCourse,
        });
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn push_child(&mut self, value: T, label: impl Into<String>, style: ChoiceStyle) {
        self.children.push(Entry {
            label: label.into(),
            style,
            selection: Selection::Child(value),
        });
    }

    pub fn len(&self) -> usize {
        self.leading.len() + self.children.len() + usize::from(self.exit)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Entries in presentation order
    pub fn choices(&self) -> Vec<Choice> {
        let mut choices: Vec<Choice> = self
            .leading
            .iter()
            .chain(self.children.iter())
            .map(|entry| (entry.label.clone(), entry.style))
            .enumerate()
            .map(|(index, (label, style))| Choice {
                id: ChoiceId(index),
                label,
                style,
            })
            .collect();

        if self.exit {
            choices.push(Choice {
                id: ChoiceId(choices.len()),
                label: EXIT_LABEL.to_string(),
                style: ChoiceStyle::Control,
            });
        }
        choices
    }

    /// Turn the presenter's response into a selection.
    ///
    /// `None` is a cancellation. An id outside this menu means the presenter
    /// and the menu disagree, which is an internal error.
    pub fn decode(mut self, response: Option<ChoiceId>) -> Result<Selection<T>> {
        let Some(id) = response else {
            return Ok(Selection::Cancelled);
        };

        let mut index = id.0;
        if index < self.leading.len() {
            return Ok(self.leading.swap_remove(index).selection);
        }
        index -= self.leading.len();

        if index < self.children.len() {
            return Ok(self.children.swap_remove(index).selection);
        }
        index -= self.children.len();

        if self.exit && index == 0 {
            return Ok(Selection::Exit);
        }
        Err(NavError::UnknownSelection(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Menu<&'static str> {
        let mut menu = Menu::new("Header").with_parent().with_exit();
        menu.push_child("a", "Alpha", ChoiceStyle::Plain);
        menu.push_child("b", "Beta", ChoiceStyle::Highlight);
        menu
    }

    #[test]
    fn test_control_entries_bracket_children() {
        let labels: Vec<String> = sample().choices().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![PARENT_LABEL, "Alpha", "Beta", EXIT_LABEL]);
    }

    #[test]
    fn test_decode_each_kind() {
        assert_eq!(sample().decode(None).unwrap(), Selection::Cancelled);
        assert_eq!(sample().decode(Some(ChoiceId(0))).unwrap(), Selection::Parent);
        assert_eq!(sample().decode(Some(ChoiceId(2))).unwrap(), Selection::Child("b"));
        assert_eq!(sample().decode(Some(ChoiceId(3))).unwrap(), Selection::Exit);
    }

    #[test]
    fn test_unknown_id_is_error() {
        let result = sample().decode(Some(ChoiceId(4)));
        assert!(matches!(result, Err(NavError::UnknownSelection(ChoiceId(4)))));
    }

    #[test]
    fn test_ids_match_positions() {
        let choices = sample().choices();
        for (index, choice) in choices.iter().enumerate() {
            assert_eq!(choice.id, ChoiceId(index));
        }
        assert_eq!(sample().len(), 4);
        assert_eq!(sample().child_count(), 2);
    }
}
