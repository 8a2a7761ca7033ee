//! Configuration loading for KohraNav

use crate::error::{NavError, Result};
use kohra_map::{AgentConfig, MazeConfig};
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "kohra.toml";

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Where `bench` writes its JSON results
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,

    /// Print a masked frame after every step of `run`
    #[serde(default)]
    pub frames: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            frames: false,
        }
    }
}

fn default_results_path() -> PathBuf {
    PathBuf::from("results.json")
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `explicit` if given, else `kohra.toml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading configuration from {}", path.display());
            return Self::load(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            info!("Loading configuration from {}", fallback.display());
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kohra_map::Algorithm;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = NavConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.agent, AgentConfig::default());
        assert_eq!(config.maze, MazeConfig::default());
        assert_eq!(config.output.results_path, PathBuf::from("results.json"));
        assert!(!config.output.frames);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[agent]\nalgorithm = \"bfs\"\nfog = false\n\n[maze]\nwidth = 31\n",
        )
        .unwrap();

        let config = NavConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.agent.algorithm, Algorithm::Bfs);
        assert!(!config.agent.fog);
        assert_eq!(config.agent.max_steps, 10_000);
        assert_eq!(config.maze.width, 31);
        assert_eq!(config.maze.height, 21);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[agent]\nmax_steps = 1\n").unwrap();
        let other = dir.path().join("other.toml");
        std::fs::write(&other, "[agent]\nmax_steps = 7\n").unwrap();

        let config = NavConfig::discover(Some(&other), dir.path()).unwrap();
        assert_eq!(config.agent.max_steps, 7);
    }

    #[test]
    fn test_bad_algorithm_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[agent]\nalgorithm = \"greedy\"\n").unwrap();
        assert!(matches!(NavConfig::load(&path), Err(NavError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            NavConfig::discover(Some(&missing), dir.path()),
            Err(NavError::Config(_))
        ));
    }
}
