use crate::fruit::store::SelectionStore;
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction};
use crate::tui::navigation::NavigationState;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;

pub struct App {
    pub store: SelectionStore,
    pub navigation: NavigationState,
    pub should_quit: bool,
    pub help_mode: bool,
    // Filled in by the last draw so mouse clicks can be mapped back to rows.
    pub list_area: Rect,
    pub select_all_area: Rect,
}

impl App {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            store,
            navigation: NavigationState::new(),
            should_quit: false,
            help_mode: false,
            list_area: Rect::default(),
            select_all_area: Rect::default(),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => Ok(()),
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
                self.help_mode = false;
            }
            return Ok(());
        }

        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveCursorUp => self.navigation.move_up(),
            NormalModeAction::MoveCursorDown => self.navigation.move_down(self.store.len()),
            NormalModeAction::MoveCursorTop => self.navigation.move_to_top(),
            NormalModeAction::MoveCursorBottom => self.navigation.move_to_bottom(self.store.len()),
            NormalModeAction::ToggleCurrentItem => {
                self.toggle_item_at(self.navigation.cursor);
            }
            NormalModeAction::SelectAll => self.store.select_all(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
        Ok(())
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> Result<()> {
        if self.help_mode {
            return Ok(());
        }
        let Some((column, row)) = KeyHandler::handle_mouse_event(mouse_event) else {
            return Ok(());
        };

        if contains(self.select_all_area, column, row) {
            self.store.select_all();
        } else if let Some(index) = self.row_at(column, row) {
            self.navigation.jump_to(index, self.store.len());
            self.toggle_item_at(index);
        }
        Ok(())
    }

    /// Every toggle affordance ends here: resolve the row's id and hand it to the store.
    pub fn toggle_item_at(&mut self, index: usize) -> bool {
        match self.store.items().get(index) {
            Some(item) => {
                let id = item.id.clone();
                self.store.toggle(&id)
            }
            None => false,
        }
    }

    pub fn select_all_label(&self) -> &'static str {
        if self.store.all_checked() {
            "Deselect all"
        } else {
            "Select all"
        }
    }

    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        // Rows live inside the list's border.
        let area = self.list_area;
        if area.width < 2 || area.height < 2 {
            return None;
        }
        let inner = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);
        if !contains(inner, column, row) {
            return None;
        }
        self.navigation
            .index_for_row((row - inner.y) as usize, self.store.len())
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
