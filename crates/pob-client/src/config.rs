//! Proof API configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use pob_core::ProofType;

/// Default proof API root; the proof type is appended per request
pub const DEFAULT_API_URL: &str = "https://api.witnesschain.com/proof/v1";

/// Where and which proof family to talk to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, e.g. `https://api.witnesschain.com/proof/v1`
    pub api_url: String,

    /// Proof family (`pob` or `pol`)
    pub proof_type: ProofType,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proof_type: ProofType::default(),
        }
    }
}

impl ApiConfig {
    /// Full URL of `endpoint` under this proof type
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.proof_type,
            endpoint
        )
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
