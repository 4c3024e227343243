pub mod simulation;
pub mod configuration;
pub mod export;
pub mod benchmark;

pub use simulation::vector::Vector;
pub use simulation::states::{BodySet, GravBody, GravState, NVec3, PopulationBody, ScalarState, ThermalBody};
pub use simulation::physics::{CentralGravity, Cooling, DiffEq, LogisticGrowth, UniformGravity};
pub use simulation::solver::Solver;
pub use simulation::integrator::{advance_by, DEFAULT_DT_MAX};
pub use simulation::model::{Model, ModelError, OrbitModel, OrbitalElements};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, SolverConfig};

pub use export::trace::{Trace, TraceRecord};

pub use benchmark::benchmark::{bench_solvers, bench_substeps};
