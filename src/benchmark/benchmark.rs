use std::time::Instant;

use crate::simulation::model::{OrbitModel, OrbitalElements};
use crate::simulation::physics::CentralGravity;
use crate::simulation::solver::Solver;

/// Helper to build a synthetic belt of `n` bodies
fn make_elements(n: usize) -> Vec<OrbitalElements> {
    let mut elements = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic elements, no rand needed
        elements.push(OrbitalElements {
            name: format!("body{i}"),
            a: 0.4 + 0.005 * i_f,
            e: 0.05 + 0.4 * (i_f * 0.37).sin().abs(),
            m: 1.0e-6,
        });
    }

    elements
}

/// Benchmark the per-tick advance cost of each solver for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_solvers() {
    println!("N,euler_ms,rk2_ms,rk4_ms");

    let dt = 0.01; // one macro tick per timed advance
    let steps = 5; // advances averaged per measurement

    for n in (100..=1600).step_by(100) {
        let elements = make_elements(n);

        let mut row = [0.0f64; 3];
        for (col, solver) in [Solver::Euler, Solver::Rk2, Solver::Rk4].iter().enumerate() {
            let mut model =
                OrbitModel::from_elements(CentralGravity::default(), &elements, *solver, 1e-3);

            // Warm-up
            model.advance(dt);

            let t0 = Instant::now();
            for _ in 0..steps {
                model.advance(dt);
            }
            row[col] = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
        }

        println!("{},{:.6},{:.6},{:.6}", n, row[0], row[1], row[2]);
    }
}

/// Benchmark how the advance cost scales with the substep bound
/// Halving dt_max should roughly double the per-tick cost
pub fn bench_substeps() {
    println!("dt_max,rk4_ms");

    let elements = make_elements(400);
    let dt = 0.01;

    for exp in 2..=6 {
        let dt_max = 10.0f64.powi(-exp);
        let mut model =
            OrbitModel::from_elements(CentralGravity::default(), &elements, Solver::Rk4, dt_max);

        // Warm-up
        model.advance(dt);

        let t0 = Instant::now();
        model.advance(dt);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{:e},{:.6}", dt_max, ms);
    }
}
