//! Cursor state for a choice dialog

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Dialog cursor over `len` entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    cursor: usize,
    len: usize,
}

impl DialogState {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    /// Currently highlighted entry, if there are any entries
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.cursor = (self.cursor + PAGE_SIZE).min(self.len.saturating_sub(1));
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_selection() {
        let mut state = DialogState::new(0);
        state.down();
        state.end();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_cursor_clamps() {
        let mut state = DialogState::new(3);
        state.up();
        assert_eq!(state.selected(), Some(0));
        state.down();
        state.down();
        state.down();
        assert_eq!(state.selected(), Some(2));
        state.home();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_paging() {
        let mut state = DialogState::new(25);
        state.page_down();
        assert_eq!(state.selected(), Some(10));
        state.page_down();
        state.page_down();
        assert_eq!(state.selected(), Some(24));
        state.page_up();
        assert_eq!(state.selected(), Some(14));
    }
}
