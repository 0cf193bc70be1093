use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "nombre", alias = "label")]
    pub label: String,
    pub emoji: String,
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    #[cfg(test)]
    pub fn new(id: &str, label: &str, emoji: &str, checked: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            emoji: emoji.to_string(),
            checked,
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            checked: !self.checked,
            ..self.clone()
        }
    }

    pub fn with_checked(&self, checked: bool) -> Self {
        Self {
            checked,
            ..self.clone()
        }
    }
}

/// One row of the selected-items panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedEntry {
    pub id: String,
    pub emoji: String,
}

impl From<&Item> for SelectedEntry {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            emoji: item.emoji.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub count: usize,
    pub id_list: String,
}
