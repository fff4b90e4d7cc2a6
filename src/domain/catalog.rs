use crate::domain::model::Item;
use crate::domain::money::Money;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::validate_unique_names;
use serde::Serialize;

/// The fixed list of purchasable items, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if let Some(item) = items.iter().find(|item| item.name.trim().is_empty()) {
            return Err(CartError::InvalidConfigValueError {
                field: "items.name".to_string(),
                value: item.name.clone(),
                reason: "Item name cannot be empty".to_string(),
            });
        }
        validate_unique_names(items.iter().map(|item| item.name.as_str()))?;

        Ok(Self { items })
    }

    /// The plants compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            items: vec![
                Item::new("Cactus", Money::from_dollars(10), "A small cactus", "cactus.jpg"),
                Item::new("Ficus", Money::from_dollars(15), "A tall ficus", "ficus.jpg"),
            ],
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
