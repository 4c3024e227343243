//! Build fully-initialized simulation runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - an `OrbitModel` with bodies placed at perihelion at t = 0
//!
//! `Scenario::run` owns the tick loop and collects the tabular trace that
//! plotting and analysis consume.

use crate::configuration::config::{ScenarioConfig, SolverConfig};
use crate::export::trace::{Trace, TraceRecord};
use crate::simulation::model::{ModelError, OrbitModel, OrbitalElements};
use crate::simulation::params::Parameters;
use crate::simulation::physics::CentralGravity;
use crate::simulation::solver::Solver;

/// A fully-initialized simulation run
pub struct Scenario {
    pub parameters: Parameters,
    pub model: OrbitModel,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map BodyConfig -> orbital elements
        let elements: Vec<OrbitalElements> = cfg
            .bodies
            .iter()
            .map(|bc| OrbitalElements {
                name: bc.name.clone(),
                a: bc.a,
                e: bc.e,
                m: bc.m,
            })
            .collect();

        let solver = match cfg.solver {
            SolverConfig::Euler => Solver::Euler,
            SolverConfig::Rk2 => Solver::Rk2,
            SolverConfig::Rk4 => Solver::Rk4,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            dt_max: p_cfg.dt_max,
            g: p_cfg.g,
        };

        // Physics: one central solar mass with the configured constant
        let physics = CentralGravity::new(1.0, parameters.g);
        let model = OrbitModel::from_elements(physics, &elements, solver, parameters.dt_max);

        Self { parameters, model }
    }

    /// Execute the configured number of ticks, tracing every body each tick
    pub fn run(&mut self) -> Result<Trace, ModelError> {
        let mut trace = Trace::new();
        let steps = self.parameters.steps;

        for i in 0..steps {
            // coarse progress, roughly every tenth of the run
            if steps >= 10 && i % (steps / 10) == 0 {
                println!("{}%...", 100 * i / steps);
            }

            self.model.advance(self.parameters.dt);
            self.record_tick(&mut trace)?;
        }

        Ok(trace)
    }

    /// Append one record per body, in row order
    fn record_tick(&self, trace: &mut Trace) -> Result<(), ModelError> {
        for (name, body) in self.model.bodies.iter() {
            let energy = self.model.total_energy(name)?;
            trace.push(TraceRecord {
                name: name.to_string(),
                x: body.x.x,
                y: body.x.y,
                z: body.x.z,
                r: body.pos(),
                v: body.vel(),
                energy,
            });
        }
        Ok(())
    }
}
