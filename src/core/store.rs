use crate::domain::model::{CartLine, Item};
use crate::utils::error::{CartError, Result};
use serde::Serialize;

/// The cart: at most one line per item name, kept in the order lines were
/// first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartStore {
    items: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one of `item`. An existing line is bumped by one; otherwise a
    /// new line with quantity 1 goes on the end.
    pub fn add_item(&mut self, item: &Item) {
        match self.line_mut(&item.name) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                tracing::debug!("add_item: {} -> quantity {}", item.name, line.quantity);
            }
            None => {
                self.items.push(CartLine::from_item(item));
                tracing::debug!("add_item: {} added as new line", item.name);
            }
        }
    }

    /// Drops the line for `name`. Removing something that is not in the cart
    /// does nothing.
    pub fn remove_item(&mut self, name: &str) {
        let before = self.items.len();
        self.items.retain(|line| line.name != name);
        if self.items.len() != before {
            tracing::debug!("remove_item: {} removed", name);
        }
    }

    /// Sets the quantity of an existing line. Unknown names are ignored;
    /// zero is refused because an empty line must be removed instead.
    pub fn update_quantity(&mut self, name: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity {
                name: name.to_string(),
                quantity,
            });
        }

        if let Some(line) = self.line_mut(name) {
            line.quantity = quantity;
            tracing::debug!("update_quantity: {} -> {}", name, quantity);
        }
        Ok(())
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.items.iter().find(|line| line.name == name)
    }

    /// How many of `name` are in the cart, 0 when absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.get(name).map(|line| line.quantity).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line_mut(&mut self, name: &str) -> Option<&mut CartLine> {
        self.items.iter_mut().find(|line| line.name == name)
    }
}
