use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub cost: Money,
    pub description: String,
    pub image: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        cost: Money,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            description: description.into(),
            image: image.into(),
        }
    }
}

/// One entry in the cart: a copy of the item as it was when first added,
/// plus how many of it the shopper wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub cost: Money,
    pub description: String,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            cost: item.cost,
            description: item.description.clone(),
            image: item.image.clone(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.cost.times(self.quantity)
    }
}

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Catalog,
    Cart,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Catalog => View::Cart,
            View::Cart => View::Catalog,
        }
    }

    /// Label of the button that switches away from this view.
    pub fn toggle_label(self) -> &'static str {
        match self {
            View::Catalog => "View Cart",
            View::Cart => "Go to Product List",
        }
    }
}
