use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;

/// Number of auxiliary channels carried next to the named ones.
pub const AUX_CHANNELS: usize = 4;

/// Normalized control inputs, owned by the caller and rewritten each substep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInputs {
    // Primary flight controls
    pub aileron: f64,  // [-1, 1]
    pub elevator: f64, // [-1, 1]
    pub rudder: f64,   // [-1, 1]
    pub throttle: f64, // [0, 1]

    // Secondary controls
    pub flap: f64,    // [0, 1]
    pub spoiler: f64, // [0, 1]
    pub retract: f64, // [0, 1], 1 = gear fully retracted
    pub pitch: f64,   // [-1, 1], propeller/collective pitch
    pub brake: f64,   // [0, 1]

    pub aux: [f64; AUX_CHANNELS], // [-1, 1]
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            aileron: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            throttle: 0.0,
            flap: 0.0,
            spoiler: 0.0,
            retract: 0.0,
            pitch: 0.0,
            brake: 0.0,
            aux: [0.0; AUX_CHANNELS],
        }
    }
}

/// Named reference to one input channel, used by hardpoint mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlChannel {
    Aileron,
    Elevator,
    Rudder,
    Throttle,
    Flap,
    Spoiler,
    Retract,
    Pitch,
    Brake,
    Aux(usize),
}

impl ControlInputs {
    /// Reads the value of a mapped channel. Unknown auxiliary slots read as zero.
    pub fn channel(&self, channel: ControlChannel) -> f64 {
        match channel {
            ControlChannel::Aileron => self.aileron,
            ControlChannel::Elevator => self.elevator,
            ControlChannel::Rudder => self.rudder,
            ControlChannel::Throttle => self.throttle,
            ControlChannel::Flap => self.flap,
            ControlChannel::Spoiler => self.spoiler,
            ControlChannel::Retract => self.retract,
            ControlChannel::Pitch => self.pitch,
            ControlChannel::Brake => self.brake,
            ControlChannel::Aux(i) => self.aux.get(i).copied().unwrap_or(0.0),
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let symmetric = [
            ("aileron", self.aileron),
            ("elevator", self.elevator),
            ("rudder", self.rudder),
            ("pitch", self.pitch),
        ];
        for (name, value) in symmetric {
            if !(-1.0..=1.0).contains(&value) {
                return Err(SimError::InvalidControl(format!("{name} out of bounds")));
            }
        }

        let positive = [
            ("throttle", self.throttle),
            ("flap", self.flap),
            ("spoiler", self.spoiler),
            ("retract", self.retract),
            ("brake", self.brake),
        ];
        for (name, value) in positive {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidControl(format!("{name} out of bounds")));
            }
        }

        for (i, value) in self.aux.iter().enumerate() {
            if !(-1.0..=1.0).contains(value) {
                return Err(SimError::InvalidControl(format!("aux[{i}] out of bounds")));
            }
        }
        Ok(())
    }

    /// Returns a copy with every channel clamped into its range. NaN inputs become zero.
    pub fn clamped(&self) -> Self {
        let sym = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        let pos = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            aileron: sym(self.aileron),
            elevator: sym(self.elevator),
            rudder: sym(self.rudder),
            throttle: pos(self.throttle),
            flap: pos(self.flap),
            spoiler: pos(self.spoiler),
            retract: pos(self.retract),
            pitch: sym(self.pitch),
            brake: pos(self.brake),
            aux: self.aux.map(sym),
        }
    }
}
