use serde::{Deserialize, Serialize};

use crate::error::{PolarChartError, PolarChartResult};

use super::RadialBarConfig;

pub const RADIAL_BAR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialBarConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: RadialBarConfig,
}

impl RadialBarConfig {
    pub fn to_json_contract_v1_pretty(&self) -> PolarChartResult<String> {
        let payload = RadialBarConfigJsonContractV1 {
            schema_version: RADIAL_BAR_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PolarChartError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PolarChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<RadialBarConfig>(input) {
            config.validate()?;
            return Ok(config);
        }
        let payload: RadialBarConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PolarChartError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != RADIAL_BAR_CONFIG_JSON_SCHEMA_V1 {
            return Err(PolarChartError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()?;
        Ok(payload.config)
    }
}
