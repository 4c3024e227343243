//! Core body-state types for the orbit simulator.
//!
//! Defines the body records the models advance:
//! - `GravBody`  using `NVec3` position/velocity plus a mass tag
//! - `ThermalBody` / `PopulationBody` for scalar-state physics
//! - `BodySet`, a named collection of gravitational bodies
//!
//! A body's dynamical state is read out as a fixed-size `nalgebra` vector
//! and written back after each advance; mass never enters the state vector.

use std::collections::HashMap;

use nalgebra::{SVector, Vector3};

pub type NVec3 = Vector3<f64>;

/// Dynamical state of a gravitational body: `[x, y, z, vx, vy, vz]`
pub type GravState = SVector<f64, 6>;

/// State of a scalar-physics body (temperature, population)
pub type ScalarState = SVector<f64, 1>;

#[derive(Debug, Clone)]
pub struct GravBody {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64,   // mass
}

impl GravBody {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Distance from the force center
    pub fn pos(&self) -> f64 {
        self.x.norm()
    }

    /// Speed
    pub fn vel(&self) -> f64 {
        self.v.norm()
    }

    /// Dynamical state vector `[x, y, z, vx, vy, vz]`
    /// Mass rides on the record and is not part of the state
    pub fn state(&self) -> GravState {
        GravState::new(self.x.x, self.x.y, self.x.z, self.v.x, self.v.y, self.v.z)
    }

    /// Replace position and velocity from a state vector
    pub fn set_state(&mut self, f: GravState) {
        self.x = NVec3::new(f[0], f[1], f[2]);
        self.v = NVec3::new(f[3], f[4], f[5]);
    }
}

/// An object that has temperature
#[derive(Debug, Clone)]
pub struct ThermalBody {
    pub temperature: f64,
}

impl ThermalBody {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    pub fn state(&self) -> ScalarState {
        ScalarState::new(self.temperature)
    }

    pub fn set_state(&mut self, f: ScalarState) {
        self.temperature = f[0];
    }
}

/// An object that has population
#[derive(Debug, Clone)]
pub struct PopulationBody {
    pub population: f64,
}

impl PopulationBody {
    pub fn new(population: f64) -> Self {
        Self { population }
    }

    pub fn state(&self) -> ScalarState {
        ScalarState::new(self.population)
    }

    pub fn set_state(&mut self, f: ScalarState) {
        self.population = f[0];
    }
}

/// Named collection of gravitational bodies.
///
/// Bodies live in a contiguous row array; a parallel name list and a
/// name-to-row map keep lookups cheap. Row order is stable except on
/// insert/remove, and removing a row shifts every later mapping entry
/// down by one so mapped indices always stay in `[0, len)`.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Vec<GravBody>,
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body under `name`, or replace the body already mapped to it
    pub fn insert(&mut self, name: impl Into<String>, body: GravBody) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&row) => self.bodies[row] = body,
            None => {
                self.index.insert(name.clone(), self.bodies.len());
                self.names.push(name);
                self.bodies.push(body);
            }
        }
    }

    /// Remove the body mapped to `name`, shifting later rows down
    pub fn remove(&mut self, name: &str) -> Option<GravBody> {
        let row = self.index.remove(name)?;
        self.names.remove(row);
        let body = self.bodies.remove(row);
        for mapped in self.index.values_mut() {
            if *mapped > row {
                *mapped -= 1;
            }
        }
        Some(body)
    }

    pub fn get(&self, name: &str) -> Option<&GravBody> {
        self.index.get(name).map(|&row| &self.bodies[row])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut GravBody> {
        let row = *self.index.get(name)?;
        Some(&mut self.bodies[row])
    }

    /// Row index of `name`, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read-only view over `(name, body)` pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GravBody)> {
        self.names.iter().map(String::as_str).zip(self.bodies.iter())
    }

    /// Read-only view of the body rows
    pub fn bodies(&self) -> &[GravBody] {
        &self.bodies
    }

    /// Mutable view of the body rows, used by the per-tick advance loop
    pub fn bodies_mut(&mut self) -> &mut [GravBody] {
        &mut self.bodies
    }
}
