//! Frame-stack navigation over course nodes
//!
//! Each frame is a [`View`]. The controller rebuilds the top frame's menu on
//! every step, so returning to a frame always shows fresh filesystem state.
//! Depth is bounded by the stack, not the call stack.

use crate::core::error::{NavError, Result};
use crate::course::{ChildGroup, Node};
use crate::nav::menu::{ChoiceStyle, Menu, Selection, PARENT_LABEL, SELECT_COURSE_LABEL};
use crate::nav::ordering::order_by_label;
use crate::ui::Presenter;

/// One navigable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A node's description with one entry per child group
    Overview(Node),
    /// The children of one group of a node
    Listing(Node, ChildGroup),
}

impl View {
    pub fn node(&self) -> &Node {
        match self {
            View::Overview(node) | View::Listing(node, _) => node,
        }
    }

    /// Header and entries for this view, read fresh from disk
    pub fn build_menu(&self) -> Result<Menu<View>> {
        match self {
            View::Overview(node) => {
                let mut menu = Menu::new(node.describe()?);
                for group in node.child_groups() {
                    menu.push_child(
                        View::Listing(node.clone(), *group),
                        group.label(),
                        ChoiceStyle::Plain,
                    );
                }
                Ok(menu.with_exit())
            }
            View::Listing(node, group) => {
                let header = format!(
                    "{} of {}\nLocation: {}",
                    group.name(),
                    node.display_title()?,
                    node.location()
                );

                let mut labeled = Vec::new();
                for child in node.children(*group)? {
                    let child = child?;
                    let label = child.label()?;
                    labeled.push((View::Overview(child), label));
                }

                let mut menu = Menu::new(header);
                for (view, label) in order_by_label(labeled) {
                    menu.push_child(view, label, ChoiceStyle::Plain);
                }
                Ok(menu.with_exit())
            }
        }
    }
}

/// Where a frame is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Listing,
    Describing,
    AwaitingSelection,
    Recursing,
    Returning,
    Exiting,
}

/// How navigation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The outermost frame was cancelled
    Finished,
    /// The exit entry was chosen; no further frames are shown
    Exited,
}

pub struct NavigationController<'a, P: Presenter + ?Sized> {
    presenter: &'a mut P,
    stack: Vec<View>,
    phase: Phase,
}

impl<'a, P: Presenter + ?Sized> NavigationController<'a, P> {
    /// Start with `root`'s overview as the only frame
    pub fn new(presenter: &'a mut P, root: Node) -> Self {
        Self {
            presenter,
            stack: vec![View::Overview(root)],
            phase: Phase::Listing,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&View> {
        self.stack.last()
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(?phase, depth = self.stack.len(), "navigation");
        self.phase = phase;
    }

    /// Run one Listing → AwaitingSelection → dispatch cycle of the top frame.
    ///
    /// Returns `Some` once navigation is over.
    pub fn step(&mut self) -> Result<Option<NavOutcome>> {
        let Some(view) = self.stack.last().cloned() else {
            return Ok(Some(NavOutcome::Finished));
        };

        self.enter(match &view {
            View::Overview(_) => Phase::Describing,
            View::Listing(..) => Phase::Listing,
        });
        let menu = view.build_menu()?;

        self.enter(Phase::AwaitingSelection);
        let response = self
            .presenter
            .present_choice(menu.header(), &menu.choices(), true)?;

        match menu.decode(response)? {
            Selection::Child(next) => {
                self.enter(Phase::Recursing);
                self.stack.push(next);
                Ok(None)
            }
            Selection::Cancelled => {
                self.enter(Phase::Returning);
                self.stack.pop();
                if self.stack.is_empty() {
                    Ok(Some(NavOutcome::Finished))
                } else {
                    Ok(None)
                }
            }
            Selection::Exit => {
                self.enter(Phase::Exiting);
                self.stack.clear();
                Ok(Some(NavOutcome::Exited))
            }
            Selection::Parent => Err(NavError::UnexpectedControl(PARENT_LABEL)),
            Selection::SelectCourse => Err(NavError::UnexpectedControl(SELECT_COURSE_LABEL)),
        }
    }

    /// Step until navigation ends
    pub fn run(&mut self) -> Result<NavOutcome> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }
}
