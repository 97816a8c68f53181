use serde::{Deserialize, Serialize};

use crate::error::{MigrationError, MigrationResult};

use super::MigrationConfig;

pub const MIGRATION_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: MigrationConfig,
}

impl MigrationConfig {
    pub fn to_json_contract_v1_pretty(&self) -> MigrationResult<String> {
        let payload = MigrationConfigJsonContractV1 {
            schema_version: MIGRATION_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MigrationError::InvalidJson(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> MigrationResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| MigrationError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        if value.get("schema_version").is_none() {
            return Self::from_json_str(input);
        }

        let payload: MigrationConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            MigrationError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != MIGRATION_CONFIG_JSON_SCHEMA_V1 {
            return Err(MigrationError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()?;
        Ok(payload.config)
    }
}
