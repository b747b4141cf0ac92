//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Sandbox command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Args, Debug, Clone, Default)]
pub struct CliArgs {
    /// Render target width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Render target height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Downward acceleration applied to the thrown cube.
    #[arg(long)]
    pub gravity: Option<f32>,

    /// Speed the cube leaves the camera with.
    #[arg(long)]
    pub launch_speed: Option<f32>,

    /// Degrees of camera rotation per pointer unit.
    #[arg(long)]
    pub mouse_sensitivity: Option<f32>,

    /// Start in wireframe mode.
    #[arg(long)]
    pub wireframe: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(g) = args.gravity {
            self.physics.gravity = g;
        }
        if let Some(speed) = args.launch_speed {
            self.physics.launch_speed = speed;
        }
        if let Some(sensitivity) = args.mouse_sensitivity {
            self.camera.mouse_sensitivity = sensitivity;
        }
        if let Some(wireframe) = args.wireframe {
            self.debug.wireframe = wireframe;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1280),
            gravity: Some(9.81),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.physics.gravity, 9.81);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 1080);
        assert_eq!(config.physics.launch_speed, 10.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
