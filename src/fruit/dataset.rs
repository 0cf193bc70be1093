use super::models::Item;
use log::info;
use std::collections::HashSet;
use std::fs;
use thiserror::Error;

const DEFAULT_DATASET: &str = include_str!("../../data/frutas.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate item id '{0}'")]
    DuplicateId(String),

    #[error("item at position {index} has an empty id")]
    EmptyId { index: usize },
}

/// Loads items from `path`, or the built-in fruit list when `path` is `None`.
pub fn load_items(path: Option<&str>) -> Result<Vec<Item>, DatasetError> {
    let items = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
                path: path.to_string(),
                source,
            })?;
            parse_items(&content)?
        }
        None => parse_items(DEFAULT_DATASET)?,
    };

    info!(
        "loaded {} items from {}",
        items.len(),
        path.unwrap_or("built-in dataset")
    );
    Ok(items)
}

pub fn parse_items(content: &str) -> Result<Vec<Item>, DatasetError> {
    let items: Vec<Item> = serde_json::from_str(content)?;
    validate_items(&items)?;
    Ok(items)
}

fn validate_items(items: &[Item]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(DatasetError::EmptyId { index });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(DatasetError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}
