pub struct NavigationState {
    pub cursor: usize,
    pub scroll_offset: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            scroll_offset: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self, max_items: usize) {
        if self.cursor < max_items.saturating_sub(1) {
            self.cursor += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self, max_items: usize) {
        self.cursor = max_items.saturating_sub(1);
    }

    /// Puts the cursor on `index` if it is a valid row.
    pub fn jump_to(&mut self, index: usize, max_items: usize) -> bool {
        if index < max_items {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Maps a row inside the list viewport to an item index.
    pub fn index_for_row(&self, visible_row: usize, max_items: usize) -> Option<usize> {
        let index = self.scroll_offset + visible_row;
        (index < max_items).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_state_new() {
        let nav_state = NavigationState::new();
        assert_eq!(nav_state.cursor, 0);
        assert_eq!(nav_state.scroll_offset, 0);
    }

    #[test]
    fn test_move_cursor() {
        let mut nav_state = NavigationState::new();

        nav_state.move_down(5);
        assert_eq!(nav_state.cursor, 1);

        nav_state.move_up();
        assert_eq!(nav_state.cursor, 0);

        // Can't move above the first row
        nav_state.move_up();
        assert_eq!(nav_state.cursor, 0);

        // Can't move past the last row
        nav_state.cursor = 4;
        nav_state.move_down(5);
        assert_eq!(nav_state.cursor, 4);
    }

    #[test]
    fn test_move_down_on_empty_list() {
        let mut nav_state = NavigationState::new();
        nav_state.move_down(0);
        assert_eq!(nav_state.cursor, 0);
        nav_state.move_to_bottom(0);
        assert_eq!(nav_state.cursor, 0);
    }

    #[test]
    fn test_jump_to_top_and_bottom() {
        let mut nav_state = NavigationState::new();
        nav_state.move_to_bottom(10);
        assert_eq!(nav_state.cursor, 9);
        nav_state.move_to_top();
        assert_eq!(nav_state.cursor, 0);
    }

    #[test]
    fn test_jump_to_row() {
        let mut nav_state = NavigationState::new();
        assert!(nav_state.jump_to(3, 5));
        assert_eq!(nav_state.cursor, 3);
        assert!(!nav_state.jump_to(5, 5));
        assert_eq!(nav_state.cursor, 3);
    }

    #[test]
    fn test_index_for_row_accounts_for_scroll() {
        let mut nav_state = NavigationState::new();
        assert_eq!(nav_state.index_for_row(2, 10), Some(2));

        nav_state.scroll_offset = 4;
        assert_eq!(nav_state.index_for_row(2, 10), Some(6));
        assert_eq!(nav_state.index_for_row(6, 10), None);
    }
}
