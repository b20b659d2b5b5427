#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

pub use assertions::{assert_state_finite, assert_unit_quaternion, assert_vec_eq};
pub use fixtures::*;
pub use helpers::*;
