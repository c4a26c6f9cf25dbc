use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for a [`Simulation`](crate::Simulation) run. Missing fields take
/// their default values when loaded from a file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub grid_size: usize,
    pub generations: u32,
    pub interval_ms: u64,
    pub randomize: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            generations: 500,
            interval_ms: 50,
            randomize: true,
        }
    }
}

impl SimulationConfig {
    pub const MAX_INTERVAL_MS: u64 = 60 * 60 * 1000;

    /// Reads a JSON config file. The tick interval must be between 1ms and
    /// [`Self::MAX_INTERVAL_MS`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !(1..=Self::MAX_INTERVAL_MS).contains(&config.interval_ms) {
            return Err(ConfigError::InvalidInterval {
                path: path.to_path_buf(),
                interval_ms: config.interval_ms,
            });
        }
        Ok(config)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("conway-life-{}-{name}.json", std::process::id());
        let path = env::temp_dir().join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_size, 100);
        assert_eq!(config.generations, 500);
        assert_eq!(config.interval(), Duration::from_millis(50));
        assert!(config.randomize);
    }

    #[test]
    fn test_load_full_config() {
        let path = write_temp_config(
            "full",
            r#"{"grid_size": 40, "generations": 10, "interval_ms": 200, "randomize": false}"#,
        );
        let config = SimulationConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            config,
            SimulationConfig {
                grid_size: 40,
                generations: 10,
                interval_ms: 200,
                randomize: false,
            }
        );
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let path = write_temp_config("partial", r#"{"randomize": false}"#);
        let config = SimulationConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.randomize);
        assert_eq!(config.grid_size, 100);
        assert_eq!(config.generations, 500);
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let path = write_temp_config("unknown", r#"{"grid_width": 40}"#);
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_negative_size() {
        let path = write_temp_config("negative", r#"{"grid_size": -3}"#);
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_zero_interval() {
        let path = write_temp_config("zero-interval", r#"{"interval_ms": 0}"#);
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidInterval { interval_ms: 0, .. })
        ));
    }

    #[test]
    fn test_load_interval_limits() {
        let path = write_temp_config("max-interval", r#"{"interval_ms": 3600000}"#);
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap().interval(), Duration::from_secs(3600));

        let path = write_temp_config(
            "huge-interval",
            r#"{"interval_ms": 18446744073709551615}"#,
        );
        let result = SimulationConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidInterval {
                interval_ms: u64::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("conway-life-does-not-exist.json");
        let result = SimulationConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
