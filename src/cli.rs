//! Command-line arguments.  CLI values override settings loaded from
//! `config.ron`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "dino_runner", about = "Endless runner in the terminal")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Fixed RNG seed for reproducible obstacle layouts.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw collider boxes.
    #[arg(long)]
    pub debug: bool,

    /// Tick period in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

impl GameConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if args.debug {
            self.debug = true;
        }
        if let Some(tick) = args.tick_ms {
            self.tick_ms = tick;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override() {
        let mut config = GameConfig::default();
        let args = CliArgs::parse_from(["dino_runner", "--seed", "7", "--debug", "--tick-ms", "33"]);
        config.apply_cli_overrides(&args);
        assert_eq!(config.seed, Some(7));
        assert!(config.debug);
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn no_args_keep_file_values() {
        let mut config = GameConfig { seed: Some(3), ..GameConfig::default() };
        config.apply_cli_overrides(&CliArgs::parse_from(["dino_runner"]));
        assert_eq!(config.seed, Some(3));
        assert!(!config.debug);
    }
}
