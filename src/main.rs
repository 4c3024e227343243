use orbsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Where to write the CSV trace; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    let trace = scenario.run()?;

    match args.out {
        Some(path) => {
            let mut out = BufWriter::new(File::create(&path)?);
            trace.write_csv(&mut out)?;
        }
        None => {
            let stdout = std::io::stdout();
            trace.write_csv(&mut stdout.lock())?;
        }
    }

    //orbsim::bench_solvers();
    //orbsim::bench_substeps();

    Ok(())
}
