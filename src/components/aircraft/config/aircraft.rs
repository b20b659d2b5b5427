use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{
    load_file, parse_str, AeroCoefficients, AircraftGeometry, BrakeConfig, ConfigError,
    ConfigFormat, FrictionConfig, HardpointConfig, MassModel, SteeringConfig,
};
use crate::components::ControlChannel;

/// Aerodynamic description of the airframe, selected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AirframeConfig {
    /// Fixed-wing coefficient model with asymmetric stall.
    FixedWing {
        geometry: AircraftGeometry,
        coefficients: AeroCoefficients,
    },
    /// No aerodynamic forces; used for display stand-ins and test rigs.
    Inert,
}

/// The full aircraft configuration, including mass, airframe and contact points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, used in log messages.
    pub name: String,
    /// Aerodynamic model and its parameters.
    pub airframe: AirframeConfig,
    /// Mass model of the aircraft, including weight and inertia properties.
    pub mass: MassModel,
    /// Wheels and skids, in the order they are evaluated.
    #[serde(default)]
    pub hardpoints: Vec<HardpointConfig>,
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of the programmed aircraft.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    /// Two-seat high-wing light trainer on tricycle gear.
    Trainer,
    /// A 1 kg block on four skids with no aerodynamics.
    TestBlock,
}

impl Default for AircraftConfig {
    /// The `Trainer` configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::trainer()
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source and validates it.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load
    /// or the parameters are inconsistent.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        let config = match source {
            AircraftSource::Programmed(aircraft_type) => Self::from_programmed(aircraft_type),
            AircraftSource::File(path) => Self::from_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Trainer => Self::trainer(),
            AircraftType::TestBlock => Self::test_block(),
        }
    }

    /// Loads a configuration from a YAML or JSON file and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = load_file(&path)?;
        config.validate()?;
        info!(
            name = %config.name,
            path = %path.as_ref().display(),
            hardpoints = config.hardpoints.len(),
            "Loaded aircraft configuration"
        );
        Ok(config)
    }

    /// Parses and validates a configuration held in memory.
    pub fn from_str_with_format(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = parse_str(contents, format)?;
        config.validate()?;
        Ok(config)
    }

    pub fn trainer() -> Self {
        let mut nose =
            HardpointConfig::wheel("nose_wheel", Vector3::new(1.5, 0.0, 1.0), 20_000.0, 1_500.0);
        nose.max_force = 5_000.0;
        nose.steering = Some(SteeringConfig {
            channel: ControlChannel::Rudder,
            max_angle: 0.35,
        });

        let main_wheel = |name: &str, y: f64| {
            let mut wheel =
                HardpointConfig::wheel(name, Vector3::new(-0.3, y, 1.0), 40_000.0, 3_500.0);
            wheel.max_force = 9_000.0;
            wheel.brake = Some(BrakeConfig {
                percent: 1.0,
                channel: Some(ControlChannel::Brake),
            });
            wheel
        };

        let wing_skid = |name: &str, y: f64| {
            let mut skid =
                HardpointConfig::wheel(name, Vector3::new(-0.3, y, 0.3), 30_000.0, 1_500.0);
            skid.max_force = 3_000.0;
            skid.friction = FrictionConfig::skid();
            skid
        };

        Self {
            name: "Trainer".to_string(),
            airframe: AirframeConfig::FixedWing {
                geometry: AircraftGeometry::trainer(),
                coefficients: AeroCoefficients::trainer(),
            },
            mass: MassModel::trainer(),
            hardpoints: vec![
                nose,
                main_wheel("left_main", -1.1),
                main_wheel("right_main", 1.1),
                wing_skid("left_tip", -5.0),
                wing_skid("right_tip", 5.0),
            ],
        }
    }

    pub fn test_block() -> Self {
        let corner = |name: &str, x: f64, y: f64| {
            let mut skid = HardpointConfig::wheel(name, Vector3::new(x, y, 0.1), 400.0, 4.0);
            skid.max_force = 80.0;
            skid
        };
        Self {
            name: "TestBlock".to_string(),
            airframe: AirframeConfig::Inert,
            mass: MassModel::new(1.0, 0.05, 0.05, 0.05, 0.0),
            hardpoints: vec![
                corner("front_left", 0.2, -0.2),
                corner("front_right", 0.2, 0.2),
                corner("rear_left", -0.2, -0.2),
                corner("rear_right", -0.2, 0.2),
            ],
        }
    }

    /// Checks every parameter group; the first failure is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError("name must not be empty".into()));
        }
        self.mass.validate()?;
        if let AirframeConfig::FixedWing {
            geometry,
            coefficients,
        } = &self.airframe
        {
            geometry.validate()?;
            coefficients.validate()?;
        }
        for hardpoint in &self.hardpoints {
            hardpoint.validate()?;
        }
        Ok(())
    }
}
