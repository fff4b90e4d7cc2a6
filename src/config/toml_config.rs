use crate::domain::catalog::Catalog;
use crate::domain::model::Item;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog file layout:
///
/// ```toml
/// [[items]]
/// name = "Cactus"
/// cost = "$10"
/// description = "A small cactus"
/// image = "${ASSET_DIR}/cactus.jpg"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlCatalog {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TomlCatalog {
    /// 從 TOML 檔案載入商品目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析商品目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ASSET_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate()?;
        Catalog::new(self.items)
    }
}

impl Validate for TomlCatalog {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("items", &self.items)?;

        for item in &self.items {
            validate_non_empty_string("items.name", &item.name)?;
            validate_non_empty_string("items.image", &item.image)?;
        }

        validate_unique_names(self.items.iter().map(|item| item.name.as_str()))
    }
}
