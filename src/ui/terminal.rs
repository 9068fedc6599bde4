//! Full-screen terminal dialogs (crossterm + ratatui)

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::core::error::{NavError, Result};
use crate::nav::menu::{Choice, ChoiceId, ChoiceStyle};
use crate::ui::state::DialogState;
use crate::ui::Presenter;

const CHOICE_HINT: &str = "↑/↓ move · Enter select · Esc back";
const CHOICE_HINT_NO_CANCEL: &str = "↑/↓ move · Enter select";
const MESSAGE_HINT: &str = "Press any key to continue";

/// Owns the terminal for the lifetime of the session.
///
/// Raw mode and the alternate screen are restored on drop, including when a
/// fatal error unwinds out of navigation.
pub struct TerminalPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    title: String,
}

impl TerminalPresenter {
    pub fn new(title: impl Into<String>) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            title: title.into(),
        })
    }

    /// Next key press; releases and non-key events are ignored
    fn next_key() -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn style_for(style: ChoiceStyle) -> Style {
    match style {
        ChoiceStyle::Plain => Style::default(),
        ChoiceStyle::Control => Style::default().fg(Color::Blue),
        ChoiceStyle::Highlight => Style::default().fg(Color::Green),
    }
}

/// Split into header, body and a one-line footer
fn split(area: Rect, header_lines: usize) -> (Rect, Rect, Rect) {
    let header_height = u16::try_from(header_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height.saturating_sub(4))
        .max(3)
        .min(area.height);
    let footer_height = 1u16.min(area.height - header_height);
    let body_height = area.height - header_height - footer_height;

    let header = Rect {
        height: header_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: body_height,
        ..area
    };
    let footer = Rect {
        y: body.y + body_height,
        height: footer_height,
        ..area
    };
    (header, body, footer)
}

fn render_choice(
    frame: &mut Frame,
    title: &str,
    header: &str,
    choices: &[Choice],
    list_state: &mut ListState,
    hint: &str,
) {
    let (header_area, list_area, footer_area) = split(frame.size(), header.lines().count());

    let header_widget = Paragraph::new(header.to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(header_widget, header_area);

    let items: Vec<ListItem> = choices
        .iter()
        .map(|choice| ListItem::new(choice.label.as_str()).style(style_for(choice.style)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, list_state);

    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

fn render_message(frame: &mut Frame, title: &str, text: &str) {
    let area = frame.size();
    let (_, _, footer_area) = split(area, 0);
    let body_area = Rect {
        height: area.height - footer_area.height,
        ..area
    };

    let body = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, body_area);
    frame.render_widget(
        Paragraph::new(MESSAGE_HINT).style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

impl Presenter for TerminalPresenter {
    fn present_choice(
        &mut self,
        header: &str,
        choices: &[Choice],
        allow_cancel: bool,
    ) -> Result<Option<ChoiceId>> {
        let mut state = DialogState::new(choices.len());
        let mut list_state = ListState::default();
        let hint = if allow_cancel {
            CHOICE_HINT
        } else {
            CHOICE_HINT_NO_CANCEL
        };

        loop {
            list_state.select(state.selected());
            let title = self.title.as_str();
            self.terminal.draw(|frame| {
                render_choice(frame, title, header, choices, &mut list_state, hint)
            })?;

            let key = Self::next_key()?;
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Err(NavError::Presenter("interrupted".to_string()));
            }

            match key.code {
                KeyCode::Up | KeyCode::Char('k') => state.up(),
                KeyCode::Down | KeyCode::Char('j') => state.down(),
                KeyCode::PageUp => state.page_up(),
                KeyCode::PageDown => state.page_down(),
                KeyCode::Home => state.home(),
                KeyCode::End => state.end(),
                KeyCode::Enter => {
                    if let Some(index) = state.selected() {
                        return Ok(Some(choices[index].id));
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') if allow_cancel => return Ok(None),
                _ => {}
            }
        }
    }

    fn show_message(&mut self, title: &str, text: &str) -> Result<()> {
        self.terminal
            .draw(|frame| render_message(frame, title, text))?;
        Self::next_key()?;
        Ok(())
    }
}
