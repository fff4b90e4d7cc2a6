use crate::config::CatalogFile;
use crate::domain::catalog::Catalog;
use crate::domain::ports::{BuiltinCatalog, CatalogSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "plant-cart")]
#[command(about = "A small plant shop with a shopping cart, driven from the terminal")]
pub struct CliConfig {
    /// TOML catalog file; the built-in plants are used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => CatalogFile::new(path).load_catalog(),
            None => BuiltinCatalog.load_catalog(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        Ok(())
    }
}
