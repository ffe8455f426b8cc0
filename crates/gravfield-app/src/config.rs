//! Command-line arguments and config file loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use gravfield_sim::engine::SimConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "gravfield", about = "2D N-body gravity with a sampled force field")]
pub struct Args {
    /// JSON config file. Missing fields use built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop after this many presented frames (0 runs until interrupted).
    #[arg(short, long, default_value_t = 600)]
    pub frames: u64,

    /// Override the RNG seed used for scattered layouts.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Withhold every n-th frame (n >= 2), as a minimized window would.
    #[arg(long, value_parser = clap::value_parser!(u64).range(2..))]
    pub drop_every: Option<u64>,

    /// Pace frames to wall-clock time instead of running flat out.
    #[arg(long)]
    pub realtime: bool,

    /// Write the final snapshot as JSON to this path.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl Args {
    pub fn frame_limit(&self) -> Option<u64> {
        (self.frames > 0).then_some(self.frames)
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Build the effective config: file (or defaults), then CLI overrides.
pub fn resolve(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid simulation config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["gravfield"]);
        assert_eq!(args.frames, 600);
        assert_eq!(args.frame_limit(), Some(600));
        assert!(args.config.is_none());
        assert!(!args.realtime);
    }

    #[test]
    fn test_zero_frames_means_unlimited() {
        let args = Args::parse_from(["gravfield", "--frames", "0"]);
        assert_eq!(args.frame_limit(), None);
    }

    #[test]
    fn test_seed_override() {
        let args = Args::parse_from(["gravfield", "--seed", "9", "--drop-every", "4"]);
        let config = resolve(&args).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(args.drop_every, Some(4));
    }

    #[test]
    fn test_drop_every_below_two_rejected() {
        for n in ["0", "1"] {
            let result = Args::try_parse_from(["gravfield", "--drop-every", n]);
            assert!(result.is_err(), "--drop-every {n} should be rejected");
        }
        let args = Args::try_parse_from(["gravfield", "--drop-every", "2"]).unwrap();
        assert_eq!(args.drop_every, Some(2));
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join(format!("gravfield-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "substeps": 2, "strength": 1.5 }"#).unwrap();
        let args = Args::parse_from(["gravfield", "--config", path.to_str().unwrap()]);
        let config = resolve(&args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.substeps, 2);
        assert_eq!(config.strength, 1.5);
        assert_eq!(config.scene.grid_count, 40);
    }

    #[test]
    fn test_invalid_config_file_reported() {
        let path = std::env::temp_dir().join(format!("gravfield-bad-{}.json", std::process::id()));
        fs::write(&path, r#"{ "substeps": 0 }"#).unwrap();
        let args = Args::parse_from(["gravfield", "--config", path.to_str().unwrap()]);
        let err = resolve(&args).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("substeps"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/nonexistent/gravfield.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
