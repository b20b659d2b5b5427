use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// A contact point carried a normal force above its configured maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadEvent {
    /// Aircraft that raised the event.
    pub aircraft: Uuid,
    /// Index of the hardpoint in the aircraft's collection.
    pub hardpoint: usize,
    pub name: String,
    /// Normal force at the moment of exceedance [N]
    pub magnitude: f64,
    /// Configured maximum [N]
    pub limit: f64,
}

/// Sending half of the overload channel. Cheap to clone; every aircraft can
/// hold its own copy of one sender and the host drains a single receiver.
#[derive(Debug, Clone)]
pub struct OverloadSender(Sender<OverloadEvent>);

/// Receiving half of the overload channel.
#[derive(Debug, Clone)]
pub struct OverloadReceiver(Receiver<OverloadEvent>);

/// Creates an unbounded overload channel.
pub fn overload_channel() -> (OverloadSender, OverloadReceiver) {
    let (s, r) = crossbeam_channel::unbounded();
    (OverloadSender(s), OverloadReceiver(r))
}

impl OverloadSender {
    /// Dispatches an event. A disconnected receiver is not an error for the
    /// simulation, it is only logged.
    pub fn send(&self, event: OverloadEvent) {
        match self.0.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) | Err(TrySendError::Disconnected(event)) => {
                warn!(
                    aircraft = %event.aircraft,
                    hardpoint = %event.name,
                    "Overload event dropped, no receiver"
                );
            }
        }
    }
}

impl OverloadReceiver {
    /// Drains every pending event without blocking.
    pub fn drain(&self) -> Vec<OverloadEvent> {
        self.0.try_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
