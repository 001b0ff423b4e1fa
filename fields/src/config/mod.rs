// Field configuration, mirroring assets/config/default.json.
// Hosts may load their own file; the embedded default is always available.
use crate::state::document_field::{DocumentField, DocumentMode};
use crate::state::money_field::MoneyField;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use shared::models::ErrorCode;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FieldConfig {
    pub version: String,
    pub money: MoneySettings,
    pub document: DocumentSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MoneySettings {
    pub include_symbol: bool,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DocumentSettings {
    #[serde(default)]
    pub mode: DocumentMode,
    #[serde(default)]
    pub required: bool,
    /// Message overrides keyed by error code ("cpf_invalid", ...).
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl FieldConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FieldConfig = serde_json::from_str(json)
            .map_err(|e| anyhow!("Failed to parse field configuration: {}", e))?;
        tracing::debug!(version = %config.version, "Loaded field configuration");
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read field configuration '{}': {}", path.display(), e))?;
        Self::from_json_str(&json)
            .map_err(|e| anyhow!("Invalid field configuration '{}': {}", path.display(), e))
    }

    /// User-facing text for an error code, honoring configured overrides.
    pub fn message_for(&self, code: ErrorCode) -> &str {
        self.document
            .messages
            .get(code.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| code.message())
    }

    pub fn money_field(&self) -> MoneyField {
        MoneyField::new(self.money.include_symbol, &self.money.placeholder)
    }

    pub fn document_field(&self) -> DocumentField {
        DocumentField::new(self.document.mode, self.document.required)
    }
}
