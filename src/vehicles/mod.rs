mod airframe;
mod traits;

pub use airframe::Airframe;
pub use traits::AeroModel;
