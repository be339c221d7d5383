use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::position::{Position, DEFAULT_STEP};
use crate::waypoint::DEFAULT_WAYPOINT_NAME;

pub const LONDON: Position = Position::new(51.505, -0.09);
pub const TALLINN: Position = Position::new(59.437, 24.7536);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub default_position: Position,
    pub step: f64,
    pub default_waypoint_name: String,
}

impl StoreConfig {
    pub fn london() -> Self {
        Self::with_default_position(LONDON)
    }

    pub fn tallinn() -> Self {
        Self::with_default_position(TALLINN)
    }

    pub fn with_default_position(default_position: Position) -> Self {
        StoreConfig {
            default_position,
            step: DEFAULT_STEP,
            default_waypoint_name: DEFAULT_WAYPOINT_NAME.to_string(),
        }
    }

    /// Missing fields fall back to the London defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config = Self::from_json_str(&json)?;
        info!("loaded store config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            bail!("Invalid step: {}, expect a positive number", self.step);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::london()
    }
}
