//! System models: named body collections advanced under one shared physics
//!
//! `Model` drives the integrator for every body per tick. `OrbitModel`
//! specializes it to central gravity, adding construction from orbital
//! elements and per-body energy queries.

use thiserror::Error;

use crate::simulation::integrator::advance_by;
use crate::simulation::physics::{CentralGravity, DiffEq};
use crate::simulation::solver::Solver;
use crate::simulation::states::{BodySet, GravBody, NVec3};

/// Lookup failures raised by name-addressed model queries
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown body: {0}")]
    UnknownBody(String),
}

/// Initial orbital elements for one body
#[derive(Debug, Clone)]
pub struct OrbitalElements {
    pub name: String,
    pub a: f64, // semi-major axis, AU
    pub e: f64, // eccentricity
    pub m: f64, // mass, solar masses
}

/// A named collection of bodies sharing one physics, one solver, and one
/// clock. The integrator driver receives the physics explicitly on every
/// call; neither the solver nor the physics holds a reference to the other.
#[derive(Debug, Clone)]
pub struct Model<P> {
    pub bodies: BodySet,
    pub physics: P,
    pub solver: Solver,
    pub dt_max: f64, // substep stability bound
    pub time: f64,   // cumulative simulation time
}

impl<P: DiffEq<6>> Model<P> {
    pub fn new(physics: P, bodies: BodySet, solver: Solver, dt_max: f64) -> Self {
        Self {
            bodies,
            physics,
            solver,
            dt_max,
            time: 0.0,
        }
    }

    /// Advance every body by `dt` and return the new clock value
    ///
    /// Bodies share the requested duration and the substep bound, so each
    /// reaches the same final time.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let mut tn = self.time;
        for body in self.bodies.bodies_mut() {
            let (t, f) = advance_by(
                self.solver,
                &self.physics,
                self.time,
                body.state(),
                dt,
                self.dt_max,
            );
            body.set_state(f);
            tn = t;
        }
        self.time = tn;
        tn
    }
}

/// Central-gravity model built from orbital elements
pub type OrbitModel = Model<CentralGravity>;

impl OrbitModel {
    /// Build a model with each body at perihelion on the +x axis and its
    /// full speed along +y
    ///
    /// Perihelion distance is `a (1 - e)` and the perihelion speed follows
    /// from vis-viva: `v = sqrt(G M (1 + e) / ((1 - e) a))`. This is the
    /// only supported initial-condition convention.
    pub fn from_elements(
        physics: CentralGravity,
        elements: &[OrbitalElements],
        solver: Solver,
        dt_max: f64,
    ) -> Self {
        let gm = physics.grav_param();

        let mut bodies = BodySet::new();
        for el in elements {
            let perihelion = el.a * (1.0 - el.e);
            let speed = (gm * (1.0 + el.e) / ((1.0 - el.e) * el.a)).sqrt();
            bodies.insert(
                el.name.clone(),
                GravBody::new(
                    NVec3::new(perihelion, 0.0, 0.0),
                    NVec3::new(0.0, speed, 0.0),
                    el.m,
                ),
            );
        }

        Self::new(physics, bodies, solver, dt_max)
    }

    /// The five-body preset: Mercury, Venus, Earth, Mars, and a
    /// long-period comet
    pub fn solar_system(solver: Solver, dt_max: f64) -> Self {
        let elements: Vec<OrbitalElements> = [
            ("Mercury", 0.3871, 0.206, 0.17),
            ("Venus", 0.7233, 0.007, 2.44),
            ("Earth", 1.0, 0.017, 3.00),
            ("Mars", 1.5273, 0.093, 0.32),
            ("Comet", 3.0, 0.9, 1.0),
        ]
        .iter()
        .map(|&(name, a, e, m)| OrbitalElements {
            name: name.to_string(),
            a,
            e,
            m: m * 1e-6, // masses tabulated in micro solar masses
        })
        .collect();

        Self::from_elements(CentralGravity::default(), &elements, solver, dt_max)
    }

    /// Look up a body by name
    pub fn get_body(&self, name: &str) -> Result<&GravBody, ModelError> {
        self.bodies
            .get(name)
            .ok_or_else(|| ModelError::UnknownBody(name.to_string()))
    }

    /// Potential plus kinetic energy of a named body at its current state
    ///
    /// `G M m / r + m v^2 / 2`, a pure query against the latest state.
    pub fn total_energy(&self, name: &str) -> Result<f64, ModelError> {
        let body = self.get_body(name)?;
        let gm = self.physics.grav_param();
        let pot = gm * body.m / body.pos();
        let ke = 0.5 * body.m * body.vel() * body.vel();
        Ok(pot + ke)
    }
}
