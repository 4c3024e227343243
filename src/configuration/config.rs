//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`SolverConfig`]     – which integration scheme advances the bodies
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial orbital elements for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! solver: "rk4"           # or "euler" / "rk2"
//!
//! parameters:
//!   dt: 0.01              # years advanced per tick
//!   steps: 600            # total tick count
//!   dt_max: 0.001         # substep stability bound
//!   g: 39.4784176         # gravitational constant, 4*pi^2 in AU/yr/Msun
//!
//! bodies:
//!   - name: "Mercury"
//!     a: 0.3871           # semi-major axis, AU
//!     e: 0.206            # eccentricity
//!     m: 1.7e-7           # mass, solar masses
//!   - name: "Earth"
//!     a: 1.0
//!     e: 0.017
//!     m: 3.0e-6
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Which solver advances the state
/// `solver: "euler"`, `solver: "rk2"`, or `solver: "rk4"`
#[derive(Deserialize, Debug, Clone)]
pub enum SolverConfig {
    #[serde(rename = "euler")] // Explicit Euler, first order, cheapest per step
    Euler,

    #[serde(rename = "rk2")] // Midpoint Runge-Kutta, second order
    Rk2,

    #[serde(rename = "rk4")] // Classical Runge-Kutta, fourth order
    Rk4,
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,     // years advanced per tick
    pub steps: u32,  // total tick count
    pub dt_max: f64, // substep stability bound
    pub g: f64,      // gravitational constant
}

/// Initial orbital elements for a single body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // body name used for lookups and in the trace
    pub a: f64,       // semi-major axis in AU
    pub e: f64,       // eccentricity of the orbit
    pub m: f64,       // mass in solar masses
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub solver: SolverConfig, // integration scheme for the whole run
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // bodies that define the initial state
}
