//! List-Detail Selection
//!
//! A read-only list with a row cursor and an optional selected record.
//! Moving the cursor does not select; Enter selects the row under the
//! cursor and close hides the detail pane.

/// Selection state over a static list
#[derive(Debug, Clone)]
pub struct ListDetail<T: 'static> {
    items: &'static [T],
    cursor: usize,
    selected: Option<usize>,
}

impl<T: 'static> ListDetail<T> {
    /// Cursor and selection start on the first item, if any
    pub fn new(items: &'static [T]) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            items,
            cursor: 0,
            selected,
        }
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The record shown in the detail pane
    pub fn selected(&self) -> Option<&'static T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Select the row under the cursor
    pub fn select_cursor(&mut self) {
        if self.cursor < self.items.len() {
            self.selected = Some(self.cursor);
        }
    }

    /// Select a row directly; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
            self.cursor = index;
        }
    }

    /// Hide the detail pane
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
