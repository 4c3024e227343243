//! Differential-equation force laws
//!
//! Each physics type maps `(t, state)` to the state time-derivative, the
//! right-hand side of the governing ODE. Parameters are fixed at
//! construction; evaluation never mutates the model.

use std::f64::consts::PI;

use nalgebra::SVector;

/// Right-hand side of a governing ODE over an `N`-component state
pub trait DiffEq<const N: usize> {
    /// Instantaneous rate of change of `f` at time `t`
    fn derivative(&self, t: f64, f: SVector<f64, N>) -> SVector<f64, N>;
}

/// Inverse-square attraction toward a fixed mass at the origin
///
/// State layout `[x, y, z, vx, vy, vz]`. A body placed at the origin hits
/// the `r = 0` singularity; that precondition is the caller's to uphold.
/// Defaults use AU, years, and solar masses, so `G = 4 pi^2`.
#[derive(Debug, Clone)]
pub struct CentralGravity {
    pub g: f64, // gravitational constant
    pub m: f64, // central mass in solar masses
}

impl CentralGravity {
    pub fn new(m: f64, g: f64) -> Self {
        Self { g, m }
    }

    /// Gravitational parameter `G * M`
    pub fn grav_param(&self) -> f64 {
        self.g * self.m
    }
}

impl Default for CentralGravity {
    fn default() -> Self {
        Self {
            g: 4.0 * PI * PI,
            m: 1.0,
        }
    }
}

impl DiffEq<6> for CentralGravity {
    fn derivative(&self, _t: f64, f: SVector<f64, 6>) -> SVector<f64, 6> {
        // |r|^3, the denominator of each acceleration component
        let rad = (f[0] * f[0] + f[1] * f[1] + f[2] * f[2]).powf(1.5);
        let k = self.grav_param();
        SVector::<f64, 6>::new(
            f[3],
            f[4],
            f[5],
            -k * f[0] / rad,
            -k * f[1] / rad,
            -k * f[2] / rad,
        )
    }
}

/// Constant gravitational acceleration, state `[x, v]`
#[derive(Debug, Clone)]
pub struct UniformGravity {
    pub g: f64, // acceleration, negative = downward
}

impl Default for UniformGravity {
    fn default() -> Self {
        Self { g: -9.81 }
    }
}

impl DiffEq<2> for UniformGravity {
    fn derivative(&self, _t: f64, f: SVector<f64, 2>) -> SVector<f64, 2> {
        SVector::<f64, 2>::new(f[1], self.g)
    }
}

/// Logistic population growth `dP/dt = r P (1 - P/N)`
#[derive(Debug, Clone)]
pub struct LogisticGrowth {
    pub r: f64, // growth rate
    pub n: f64, // carrying capacity
}

impl DiffEq<1> for LogisticGrowth {
    fn derivative(&self, _t: f64, f: SVector<f64, 1>) -> SVector<f64, 1> {
        let p = f[0];
        SVector::<f64, 1>::new(self.r * p * (1.0 - p / self.n))
    }
}

/// Newtonian cooling toward an ambient temperature `dT/dt = k (Ta - T)`
#[derive(Debug, Clone)]
pub struct Cooling {
    pub ambient: f64, // ambient temperature
    pub k: f64,       // cooling coefficient
}

impl DiffEq<1> for Cooling {
    fn derivative(&self, _t: f64, f: SVector<f64, 1>) -> SVector<f64, 1> {
        SVector::<f64, 1>::new(self.k * (self.ambient - f[0]))
    }
}
