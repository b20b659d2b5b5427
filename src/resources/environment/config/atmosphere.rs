use serde::{Deserialize, Serialize};

use crate::utils::{ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_TEMP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereType {
    /// Sea-level density at every altitude.
    Constant,
    /// International Standard Atmosphere, troposphere and lower stratosphere.
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
        }
    }
}
