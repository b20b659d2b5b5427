use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Reference geometry of the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Reference wing area [m²]
    pub wing_area: f64,
    /// Wing span [m]
    pub wing_span: f64,
    /// Mean aerodynamic chord [m]
    pub mac: f64,
    /// Overall size used to space the wind-gradient samples [m].
    /// Defaults to the wing span.
    #[serde(default)]
    pub characteristic_size: Option<f64>,
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        Self {
            wing_area,
            wing_span,
            mac,
            characteristic_size: None,
        }
    }

    pub fn trainer() -> Self {
        Self::new(15.0, 10.0, 1.5)
    }

    pub fn characteristic_size(&self) -> f64 {
        self.characteristic_size.unwrap_or(self.wing_span)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wing_area", self.wing_area),
            ("wing_span", self.wing_span),
            ("mac", self.mac),
            ("characteristic_size", self.characteristic_size()),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "geometry.{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
