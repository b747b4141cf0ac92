//! The `sandbox` binary: loads configuration and runs a scripted headless session.

use std::process::ExitCode;

use clap::Parser;
use sandbox_app::{DemoPlan, PlatformDirs, run_demo};
use sandbox_config::{CliArgs, Config};
use sandbox_input::InputMap;

const BINDINGS_FILE: &str = "input.ron";

#[derive(Parser, Debug)]
#[command(name = "sandbox", about = "First-person camera and projectile sandbox")]
struct Args {
    #[command(flatten)]
    cli: CliArgs,

    /// Maximum number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Seconds per simulated frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_time: f32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let dirs = match &args.cli.config {
        Some(dir) => PlatformDirs::with_config_dir(dir.clone()),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    if let Err(e) = dirs.create_dirs() {
        eprintln!("Failed to create platform directories: {e}");
        return ExitCode::FAILURE;
    }

    let loaded = Config::load_or_create(&dirs.config_dir);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    config.apply_cli_overrides(&args.cli);

    sandbox_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = loaded {
        tracing::error!("Failed to load config: {e}");
        return ExitCode::FAILURE;
    }

    let bindings_path = dirs.config_dir.join(BINDINGS_FILE);
    let bindings = if bindings_path.exists() {
        InputMap::load_or_default(&bindings_path)
    } else {
        let defaults = InputMap::default_sandbox();
        if let Err(e) = defaults.save(&bindings_path) {
            tracing::warn!("Could not write default bindings: {e}");
        }
        defaults
    };

    let plan = DemoPlan {
        frames: args.frames,
        frame_time: args.frame_time,
    };
    let report = run_demo(&config, bindings, plan);
    tracing::info!(
        frames = report.frames,
        elapsed = report.elapsed,
        launches = report.launches,
        landings = report.landings,
        camera_position = %report.camera_position,
        camera_front = %report.camera_front,
        zoom = report.zoom,
        "Demo finished"
    );
    ExitCode::SUCCESS
}
