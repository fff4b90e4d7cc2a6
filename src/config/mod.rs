#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::catalog::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::path::PathBuf;
use toml_config::TomlCatalog;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Catalog read from a TOML file on disk.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CatalogFile {
    fn load_catalog(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        TomlCatalog::from_file(&self.path)?.into_catalog()
    }
}
