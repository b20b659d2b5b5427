//! Drives one aircraft through its substeps.
//!
//! Each call to [`Fdm::update`] runs `multiloop` substeps of `dt`:
//!
//! ```text
//! wind gradient → step → wind/gust → aux → controller → aero → propulsion → ground → accel
//! ```
//!
//! The gradient is sampled at the position the substep starts from. Ground
//! contact sees the position and attitude the step has just produced.

use nalgebra::{Matrix3, Vector3};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::aerodynamics::{sample_wind_gradient, AeroInput};
use super::controller::ControllerHook;
use super::ground::{ContactContext, HardpointCollection};
use super::physics::{Eom, HoldMode};
use super::propulsion::Propulsion;
use crate::components::{
    AirData, AircraftConfig, ControlInputs, ForceBreakdown, ForceMoment, KinematicState,
    StartState,
};
use crate::resources::{Environment, OverloadSender, SimulationConfig, Turbulence};
use crate::utils::{RngManager, SimError};
use crate::vehicles::{AeroModel, Airframe};

/// Flight dynamics model of a single aircraft.
#[derive(Debug, Clone)]
pub struct Fdm {
    id: Uuid,
    config: AircraftConfig,
    sim: SimulationConfig,
    rng: RngManager,

    eom: Eom,
    airframe: Airframe,
    hardpoints: HardpointCollection,
    turbulence: Option<Turbulence>,
    hold: HoldMode,

    loads: ForceBreakdown,
    wind_gradient: Matrix3<f64>,
    out_of_grid: bool,
    inputs_clamped: bool,
    time: f64,
    rotational_speed: f64,
    remaining_capacity: f64,
}

impl Fdm {
    /// Validates both configurations, places the aircraft at `start` and
    /// evaluates the initial loads so the first `update` is consistent.
    pub fn new(
        config: AircraftConfig,
        sim: SimulationConfig,
        start: &StartState,
        env: &dyn Environment,
    ) -> Result<Self, SimError> {
        config.validate()?;
        sim.validate()?;

        let id = Uuid::new_v4();
        let rng = RngManager::new(sim.seed);
        let turbulence = sim
            .turbulence
            .clone()
            .map(|turbulence| Turbulence::new(turbulence, &rng));

        let mut fdm = Self {
            id,
            eom: Eom::new(config.mass, start, &sim.origin),
            airframe: Airframe::from_config(&config.airframe),
            hardpoints: HardpointCollection::new(&config.hardpoints, id),
            turbulence,
            hold: HoldMode::free(),
            loads: ForceBreakdown::default(),
            wind_gradient: Matrix3::zeros(),
            out_of_grid: false,
            inputs_clamped: false,
            time: 0.0,
            rotational_speed: 0.0,
            remaining_capacity: 1.0,
            config,
            sim,
            rng,
        };
        fdm.initialize(env);

        info!(
            aircraft = %fdm.config.name,
            id = %fdm.id,
            dt = fdm.sim.dt,
            multiloop = fdm.sim.multiloop,
            "Flight model ready"
        );
        Ok(fdm)
    }

    /// Routes hardpoint overload notifications to `sender`. Points already
    /// above their limit after construction report on the next update.
    pub fn with_overload_events(mut self, sender: OverloadSender) -> Self {
        self.hardpoints.set_events(Some(sender));
        self
    }

    /// Aux refresh, loads at rest, accel and integrator seeding.
    fn initialize(&mut self, env: &dyn Environment) {
        let wind = env.wind(&self.eom.state().position_local);
        self.out_of_grid = wind.out_of_grid;
        let gust = self
            .turbulence
            .as_ref()
            .map_or_else(Vector3::zeros, Turbulence::gust);
        self.eom.aux(env, &wind.velocity, &gust);
        self.wind_gradient = self.sample_gradient(env);

        let controls = ControlInputs::default();
        self.loads = ForceBreakdown {
            aerodynamic: self.aerodynamic_loads(&controls),
            propulsive: ForceMoment::zero(),
            ground: self.ground_loads(env, &controls),
        };
        self.eom.accel(&self.loads, &self.hold);
        self.eom.init();
    }

    /// Advances the aircraft by `multiloop` substeps.
    ///
    /// # Arguments
    /// * `env` - Terrain, wind, gravity and density source.
    /// * `propulsion` - Supplies thrust loads each substep.
    /// * `controller` - May rewrite `inputs` each substep before the models read them.
    /// * `inputs` - Pilot or host inputs; left as the controller last wrote them.
    pub fn update(
        &mut self,
        env: &dyn Environment,
        propulsion: &mut dyn Propulsion,
        controller: &mut dyn ControllerHook,
        inputs: &mut ControlInputs,
    ) {
        for _ in 0..self.sim.multiloop {
            self.substep(env, propulsion, controller, inputs);
        }
        self.rotational_speed = propulsion.rotational_speed();
        self.remaining_capacity = propulsion.remaining_capacity();
    }

    fn substep(
        &mut self,
        env: &dyn Environment,
        propulsion: &mut dyn Propulsion,
        controller: &mut dyn ControllerHook,
        inputs: &mut ControlInputs,
    ) {
        let dt = self.sim.dt;

        self.wind_gradient = self.sample_gradient(env);
        self.eom.step(dt);

        let wind = env.wind(&self.eom.state().position_local);
        self.track_wind_grid(wind.out_of_grid);
        let gust = match self.turbulence.as_mut() {
            Some(turbulence) => turbulence.step(dt),
            None => Vector3::zeros(),
        };
        self.eom.aux(env, &wind.velocity, &gust);

        controller.on_substep(inputs, self.eom.state(), dt);
        self.track_input_range(inputs);
        let controls = inputs.clamped();

        let aerodynamic = self.aerodynamic_loads(&controls);
        let propulsive =
            propulsion.update(dt, &controls, &self.eom.air_data().relative_velocity);
        let ground = self.ground_loads(env, &controls);
        self.loads = ForceBreakdown {
            aerodynamic,
            propulsive,
            ground,
        };

        self.eom.accel(&self.loads, &self.hold);
        self.time += dt;
    }

    fn sample_gradient(&self, env: &dyn Environment) -> Matrix3<f64> {
        match self.airframe.characteristic_size() {
            Some(size) => sample_wind_gradient(
                env,
                &self.eom.state().position_local,
                self.eom.local_to_body(),
                size,
            ),
            None => Matrix3::zeros(),
        }
    }

    fn aerodynamic_loads(&self, controls: &ControlInputs) -> ForceMoment {
        self.airframe.forces(&AeroInput {
            air: self.eom.air_data(),
            omega_body: self.eom.state().omega_body,
            wind_gradient: &self.wind_gradient,
            controls,
        })
    }

    fn ground_loads(&mut self, env: &dyn Environment, controls: &ControlInputs) -> ForceMoment {
        let ctx = ContactContext {
            state: self.eom.state(),
            local_to_body: self.eom.local_to_body(),
            controls,
            env,
        };
        self.hardpoints.update(&ctx)
    }

    fn track_wind_grid(&mut self, out_of_grid: bool) {
        if out_of_grid && !self.out_of_grid {
            let position = self.eom.state().position_local;
            warn!(
                aircraft = %self.config.name,
                north = position.x,
                east = position.y,
                down = position.z,
                "Aircraft left the wind grid, using fallback wind"
            );
        } else if !out_of_grid && self.out_of_grid {
            debug!(aircraft = %self.config.name, "Aircraft back inside the wind grid");
        }
        self.out_of_grid = out_of_grid;
    }

    /// Warns once when inputs leave their range; the models see them clamped.
    fn track_input_range(&mut self, inputs: &ControlInputs) {
        match inputs.validate() {
            Err(err) if !self.inputs_clamped => {
                warn!(aircraft = %self.config.name, %err, "Control inputs clamped");
                self.inputs_clamped = true;
            }
            Ok(()) if self.inputs_clamped => {
                debug!(aircraft = %self.config.name, "Control inputs back in range");
                self.inputs_clamped = false;
            }
            _ => {}
        }
    }

    /// Whether the inputs of the last substep had to be clamped.
    pub fn inputs_clamped(&self) -> bool {
        self.inputs_clamped
    }

    /// Puts the aircraft back at `start` with the same configuration and seed.
    pub fn reset(&mut self, start: &StartState, env: &dyn Environment) {
        self.eom = Eom::new(self.config.mass, start, &self.sim.origin);
        self.hardpoints.reset();
        if let Some(turbulence) = self.turbulence.as_mut() {
            turbulence.reset(self.rng.get_rng("turbulence"));
        }
        self.time = 0.0;
        self.inputs_clamped = false;
        self.rotational_speed = 0.0;
        self.remaining_capacity = 1.0;
        self.initialize(env);
        debug!(aircraft = %self.config.name, "Flight model reset");
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.sim
    }

    pub fn state(&self) -> &KinematicState {
        self.eom.state()
    }

    pub fn air_data(&self) -> &AirData {
        self.eom.air_data()
    }

    pub fn eom(&self) -> &Eom {
        &self.eom
    }

    pub fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    /// Loads of the last substep, by source.
    pub fn loads(&self) -> &ForceBreakdown {
        &self.loads
    }

    /// Body-frame wind gradient of the last substep [1/s].
    pub fn wind_gradient(&self) -> &Matrix3<f64> {
        &self.wind_gradient
    }

    pub fn hardpoints(&self) -> &HardpointCollection {
        &self.hardpoints
    }

    pub fn out_of_grid(&self) -> bool {
        self.out_of_grid
    }

    /// Simulated time since creation or the last reset [s].
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Shaft speed reported by the propulsion after the last update [rad/s].
    pub fn rotational_speed(&self) -> f64 {
        self.rotational_speed
    }

    /// Energy or fuel fraction reported by the propulsion after the last update.
    pub fn remaining_capacity(&self) -> f64 {
        self.remaining_capacity
    }

    pub fn hold(&self) -> HoldMode {
        self.hold
    }

    pub fn set_hold(&mut self, hold: HoldMode) {
        self.hold = hold;
    }
}
