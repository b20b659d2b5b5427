use uuid::Uuid;

use super::hardpoint::{ContactContext, Hardpoint};
use crate::components::aircraft::config::HardpointConfig;
use crate::components::ForceMoment;
use crate::resources::OverloadSender;

/// All contact points of one aircraft.
#[derive(Debug, Clone)]
pub struct HardpointCollection {
    hardpoints: Vec<Hardpoint>,
    aircraft: Uuid,
    events: Option<OverloadSender>,
}

impl HardpointCollection {
    pub fn new(configs: &[HardpointConfig], aircraft: Uuid) -> Self {
        Self {
            hardpoints: configs
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, c)| Hardpoint::new(i, c))
                .collect(),
            aircraft,
            events: None,
        }
    }

    /// Routes overload notifications to `sender`.
    pub fn with_events(mut self, sender: OverloadSender) -> Self {
        self.set_events(Some(sender));
        self
    }

    /// Swaps the event sink. Overload latches are cleared so a point that is
    /// already overloaded reports to the new sink on its next update.
    pub fn set_events(&mut self, sender: Option<OverloadSender>) {
        self.events = sender;
        self.hardpoints.iter_mut().for_each(Hardpoint::rearm);
    }

    pub fn hardpoints(&self) -> &[Hardpoint] {
        &self.hardpoints
    }

    pub fn len(&self) -> usize {
        self.hardpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hardpoints.is_empty()
    }

    /// Sum of every hardpoint's loads, body axes about the centre of gravity.
    pub fn update(&mut self, ctx: &ContactContext) -> ForceMoment {
        let aircraft = self.aircraft;
        let events = self.events.as_ref();
        self.hardpoints
            .iter_mut()
            .fold(ForceMoment::zero(), |acc, hp| acc + hp.update(ctx, aircraft, events))
    }

    /// Number of points touching the terrain after the last update.
    pub fn contacts(&self) -> usize {
        self.hardpoints
            .iter()
            .filter(|hp| hp.report().in_contact)
            .count()
    }

    pub fn reset(&mut self) {
        self.hardpoints.iter_mut().for_each(Hardpoint::reset);
    }
}
