use clothsim::{Cloth, ScenarioConfig};
use clothsim::{bench_advance, bench_advance_curve};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of steps to advance
    #[arg(long, default_value_t = 600)]
    steps: u32,

    /// Step size in seconds
    #[arg(long, default_value_t = 0.01)]
    dt: f32,

    /// Run the advance benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_advance();
        bench_advance_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut cloth = Cloth::from_scenario(&scenario_cfg)?;

    // Center particle, watched as a progress probe
    let center = (cloth.width_num() / 2, cloth.height_num() / 2);

    let mut time = 0.0f64;
    for step in 0..args.steps {
        cloth.advance(time, args.dt);
        time += f64::from(args.dt);

        if step % 100 == 0 {
            let probe = cloth.particle(center.0, center.1);
            log::info!(
                "step {:5}, t = {:6.2} s, center particle at ({:+.3}, {:+.3}, {:+.3})",
                step,
                time,
                probe.pos.x,
                probe.pos.y,
                probe.pos.z
            );
        }
    }

    let probe = cloth.particle(center.0, center.1);
    println!(
        "advanced {} steps over {:.2} s of simulated time",
        args.steps, time
    );
    println!(
        "center particle settled at ({:+.4}, {:+.4}, {:+.4})",
        probe.pos.x, probe.pos.y, probe.pos.z
    );

    Ok(())
}
