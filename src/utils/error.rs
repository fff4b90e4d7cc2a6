use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Invalid cost '{value}': {reason}")]
    InvalidCost { value: String, reason: String },

    #[error("Unknown item: {name}")]
    UnknownItem { name: String },

    #[error("Duplicate item in catalog: {name}")]
    DuplicateItem { name: String },

    #[error("Invalid quantity {quantity} for '{name}': quantity must be at least 1")]
    InvalidQuantity { name: String, quantity: u32 },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CartError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::InvalidCost { value, .. } => {
                format!("價格格式錯誤: '{}'", value)
            }
            CartError::UnknownItem { name } => format!("'{}' is not in the catalog", name),
            CartError::DuplicateItem { name } => {
                format!("The catalog lists '{}' more than once", name)
            }
            CartError::InvalidQuantity { name, .. } => {
                format!("Quantity for '{}' must be at least 1", name)
            }
            CartError::InvalidCommand { input, reason } => {
                format!("Cannot run '{}': {}", input, reason)
            }
            CartError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置錯誤 ({}): {}", field, reason)
            }
            CartError::ConfigValidationError { field, message } => {
                format!("配置錯誤 ({}): {}", field, message)
            }
            CartError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            CartError::SerializationError(e) => format!("JSON 輸出失敗: {}", e),
            CartError::TomlError(e) => format!("TOML 格式錯誤: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::InvalidCost { .. } => "Write costs as \"$\" followed by a number, e.g. \"$10\" or \"$4.50\"",
            CartError::UnknownItem { .. } => "Run 'show' in the product list view to see available items",
            CartError::DuplicateItem { .. } => "Give every catalog item a unique name",
            CartError::InvalidQuantity { .. } => "Use 'remove <name>' to take an item out of the cart",
            CartError::InvalidCommand { .. } => "Type 'help' to list the available commands",
            CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => "Check the catalog file and command-line options",
            CartError::IoError(_) => "Check that the file exists and is readable",
            CartError::SerializationError(_) => "This is a bug; please report it",
            CartError::TomlError(_) => "Make sure the catalog file is valid TOML with [[items]] tables",
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
