use crate::domain::catalog::Catalog;
use crate::utils::error::Result;

/// Anything that can supply the catalog a shopping session starts with.
pub trait CatalogSource {
    fn load_catalog(&self) -> Result<Catalog>;
}

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::builtin())
    }
}
