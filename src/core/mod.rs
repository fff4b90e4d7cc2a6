pub mod pricing;
pub mod session;
pub mod store;

pub use crate::domain::catalog::Catalog;
pub use crate::domain::model::{CartLine, Item, View};
pub use crate::domain::money::Money;
pub use crate::domain::ports::{BuiltinCatalog, CatalogSource};
pub use crate::utils::error::Result;
