mod eom;

pub use eom::{Eom, HoldMode};
