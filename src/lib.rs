pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::CatalogFile;
pub use crate::core::{pricing, session::ShopSession, store::CartStore};
pub use crate::domain::{
    catalog::Catalog,
    model::{CartLine, Item, View},
    money::Money,
    ports::{BuiltinCatalog, CatalogSource},
};
pub use crate::utils::error::{CartError, Result};
