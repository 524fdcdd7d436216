use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::provider::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "PADELCAL_CONFIG_FILE";
const DEFAULT_DATASET: &str = "tournaments.json";

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let config_env = env::var(CONFIG_PATH_ENV_VAR).ok().map(PathBuf::from);

    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::Other, "Unable to find home directory")
    })?;

    let home_config = home.join(".padelcal.toml");

    let config_xdg = dirs::config_dir()
        .unwrap_or_else(|| home.join(".config"))
        .join("padelcal")
        .join("config.toml");

    let mut locations = vec![config_xdg, home_config];

    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    Ok(locations)
}

fn default_tick_rate() -> Duration {
    Duration::from_millis(1000)
}

fn deserialize_millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON dataset with the tournaments to show.
    pub data: PathBuf,
    #[serde(deserialize_with = "deserialize_millis")]
    pub tick_rate: Duration,
    pub max_events_per_cell: usize,
    pub show_legend: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            data: dirs::data_dir()
                .map(|dir| dir.join("padelcal").join(DEFAULT_DATASET))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET)),
            tick_rate: default_tick_rate(),
            max_events_per_cell: 3,
            show_legend: true,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;

        if config.max_events_per_cell == 0 {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                "max_events_per_cell must be at least 1",
            ));
        }

        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Config::from_toml(&content)
            .map_err(|e| e.with_msg(&format!("in '{}'", path.display())))?;

        // Relative dataset paths are relative to the config file
        if config.data.is_relative() {
            if let Some(dir) = path.parent() {
                config.data = dir.join(&config.data);
            }
        }

        Ok(config)
    }
}

/// Loads `path` if given, otherwise the first existing file of the default
/// locations. Falls back to the default config if there is none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_path(path);
    }

    let locations = match find_configfile_locations() {
        Ok(locations) => locations,
        Err(e) => {
            log::warn!("{}", e);
            Vec::new()
        }
    };

    if let Some(location) = locations.iter().find(|l| l.is_file()) {
        log::info!("Using config file '{}'", location.display());
        return Config::from_path(location);
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.tick_rate, default_tick_rate());
        assert_eq!(config.max_events_per_cell, 3);
        assert!(config.show_legend);
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r#"
            data = "/srv/padel/tournaments.json"
            tick_rate = 250
            max_events_per_cell = 5
            show_legend = false
            "#,
        )
        .unwrap();

        assert_eq!(config.data, PathBuf::from("/srv/padel/tournaments.json"));
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert_eq!(config.max_events_per_cell, 5);
        assert!(!config.show_legend);
    }

    #[test]
    fn invalid_config() {
        assert!(matches!(
            Config::from_toml("tick_rate = \"fast\"").unwrap_err().kind,
            ErrorKind::ConfigParse
        ));
        assert!(matches!(
            Config::from_toml("max_events_per_cell = 0").unwrap_err().kind,
            ErrorKind::ConfigParse
        ));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/padelcal.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
