mod aircraft;
mod environment;

pub use aircraft::*;
pub use environment::*;
