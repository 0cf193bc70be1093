use super::models::{Item, SelectedEntry, Summary};
use log::debug;

/// Owns the ordered item list and the projection of checked items.
///
/// Every operation replaces `items` with a freshly built vector and then
/// rebuilds `selected` from it, so the projection can never drift from the
/// list it is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionStore {
    items: Vec<Item>,
    selected: Vec<SelectedEntry>,
}

impl SelectionStore {
    pub fn new(items: Vec<Item>) -> Self {
        let mut store = Self {
            items: Vec::new(),
            selected: Vec::new(),
        };
        store.replace(items);
        store
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> &[SelectedEntry] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every item is checked, including the empty list.
    pub fn all_checked(&self) -> bool {
        self.items.iter().all(|item| item.checked)
    }

    /// Inverts the checked flag of the item with `id`.
    ///
    /// Returns false, leaving the state untouched, when no item matches.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            debug!("toggle ignored, unknown id {:?}", id);
            return false;
        }

        let updated = self
            .items
            .iter()
            .map(|item| if item.id == id { item.toggled() } else { item.clone() })
            .collect();
        self.replace(updated);
        debug!("toggled {:?}, {} selected", id, self.selected.len());
        true
    }

    /// Checks everything, or unchecks everything if all items were already checked.
    pub fn select_all(&mut self) {
        let all_checked = self.all_checked();
        let updated = self
            .items
            .iter()
            .map(|item| item.with_checked(!all_checked))
            .collect();
        self.replace(updated);
        debug!(
            "select all: {}",
            if all_checked { "cleared" } else { "checked every item" }
        );
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.selected.len(),
            id_list: self
                .selected
                .iter()
                .map(|entry| entry.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn replace(&mut self, items: Vec<Item>) {
        self.selected = items
            .iter()
            .filter(|item| item.checked)
            .map(SelectedEntry::from)
            .collect();
        self.items = items;
    }
}
