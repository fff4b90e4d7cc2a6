use crate::core::pricing;
use crate::core::store::CartStore;
use crate::domain::catalog::Catalog;
use crate::domain::model::View;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CartError, Result};

pub const CHECKOUT_NOTICE: &str = "Functionality to be added for future reference";

/// One shopper's session: the catalog, their cart and which view is up.
///
/// Button handlers from the two views map onto the methods here; the
/// store itself only knows add, remove and update.
#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Catalog,
    store: CartStore,
    view: View,
}

impl ShopSession {
    pub fn new(catalog: Catalog, store: CartStore) -> Self {
        Self {
            catalog,
            store,
            view: View::default(),
        }
    }

    pub fn from_source<S: CatalogSource>(source: &S) -> Result<Self> {
        let catalog = source.load_catalog()?;
        tracing::info!("Loaded catalog with {} items", catalog.len());
        Ok(Self::new(catalog, CartStore::new()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// "Add to Cart" on a product card.
    pub fn add_to_cart(&mut self, name: &str) -> Result<()> {
        let item = self
            .catalog
            .find(name)
            .ok_or_else(|| CartError::UnknownItem {
                name: name.to_string(),
            })?;
        self.store.add_item(item);
        Ok(())
    }

    /// The "+" button on a cart line.
    pub fn increment(&mut self, name: &str) -> Result<()> {
        match self.store.get(name).map(|line| line.quantity) {
            Some(quantity) => self
                .store
                .update_quantity(name, quantity.saturating_add(1)),
            None => Ok(()),
        }
    }

    /// The "-" button on a cart line: going below one removes the line.
    pub fn decrement(&mut self, name: &str) -> Result<()> {
        match self.store.get(name).map(|line| line.quantity) {
            Some(1) => {
                self.store.remove_item(name);
                Ok(())
            }
            Some(quantity) => self.store.update_quantity(name, quantity - 1),
            None => Ok(()),
        }
    }

    /// "Remove from Cart".
    pub fn remove(&mut self, name: &str) {
        self.store.remove_item(name);
    }

    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<()> {
        self.store.update_quantity(name, quantity)
    }

    pub fn toggle_view(&mut self) -> View {
        self.view = self.view.toggled();
        self.view
    }

    /// "Continue Shopping" always returns to the product list.
    pub fn continue_shopping(&mut self) {
        self.view = View::Catalog;
    }

    /// Checkout is not implemented yet; the shopper only gets a notice.
    pub fn checkout(&self) -> &'static str {
        tracing::info!("Checkout requested with {} lines in cart", self.store.len());
        CHECKOUT_NOTICE
    }

    pub fn in_cart(&self, name: &str) -> u32 {
        self.store.quantity_of(name)
    }

    pub fn subtotal(&self, name: &str) -> Option<String> {
        self.store.get(name).map(pricing::line_subtotal)
    }

    pub fn total(&self) -> String {
        pricing::cart_total(&self.store)
    }
}

impl Default for ShopSession {
    fn default() -> Self {
        Self::new(Catalog::builtin(), CartStore::new())
    }
}
