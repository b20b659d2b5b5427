//! Two-sample integration primitive.
//!
//! Both rules keep exactly one previous derivative sample:
//!
//! * Adams–Bashforth (2nd order, predictive):
//!   `x₁ = x₀ + dt/2 · (3·ẋ₀ − ẋ₋₁)`
//! * Trapezoidal on the lagged pair:
//!   `x₁ = x₀ + dt/2 · (ẋ₀ + ẋ₋₁)`
//!
//! The history has to be seeded with [`TwoSampleIntegrator::seed`] before the
//! first real step. An unseeded integrator treats the missing sample as zero,
//! which gives a wrong first step rather than a failure.

use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationRule {
    AdamsBashforth,
    Trapezoidal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSampleIntegrator<T> {
    rule: IntegrationRule,
    previous: T,
    seeded: bool,
}

impl<T> TwoSampleIntegrator<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    /// Creates an integrator with `zero` as the (unseeded) derivative history.
    pub fn new(rule: IntegrationRule, zero: T) -> Self {
        Self {
            rule,
            previous: zero,
            seeded: false,
        }
    }

    pub fn rule(&self) -> IntegrationRule {
        self.rule
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Seeds the derivative history so that the first step degenerates to Euler.
    pub fn seed(&mut self, derivative: T) {
        self.previous = derivative;
        self.seeded = true;
    }

    /// Advances `value` by one step using `derivative` as the current sample.
    pub fn step(&mut self, value: T, derivative: T, dt: f64) -> T {
        let increment = match self.rule {
            IntegrationRule::AdamsBashforth => derivative * 3.0 + self.previous * -1.0,
            IntegrationRule::Trapezoidal => derivative + self.previous,
        };
        self.previous = derivative;
        value + increment * (0.5 * dt)
    }
}
