use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default seat for `play` when --seat is omitted (landlord/up/down)
    pub seat: Option<String>,
    /// Number of suggestions shown per turn
    pub suggestions: usize,
    /// Oracle names consulted in order
    pub oracles: Vec<String>,
    /// Match log destination (JSONL), if any
    pub log_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seat: ValueSource,
    pub suggestions: ValueSource,
    pub oracles: ValueSource,
    pub log_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seat: ValueSource::Default,
            suggestions: ValueSource::Default,
            oracles: ValueSource::Default,
            log_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seat: None,
            suggestions: 3,
            oracles: vec!["greedy".into()],
            log_path: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DOUMATE_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seat {
            cfg.seat = Some(v);
            sources.seat = ValueSource::File;
        }
        if let Some(v) = f.suggestions {
            cfg.suggestions = v;
            sources.suggestions = ValueSource::File;
        }
        if let Some(v) = f.oracles {
            cfg.oracles = v;
            sources.oracles = ValueSource::File;
        }
        if let Some(v) = f.log_path {
            cfg.log_path = Some(v);
            sources.log_path = ValueSource::File;
        }
    }

    if let Ok(seat) = std::env::var("DOUMATE_SEAT")
        && !seat.is_empty()
    {
        cfg.seat = Some(seat);
        sources.seat = ValueSource::Env;
    }
    if let Ok(n) = std::env::var("DOUMATE_SUGGESTIONS")
        && !n.is_empty()
    {
        cfg.suggestions = n
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid suggestions".into()))?;
        sources.suggestions = ValueSource::Env;
    }
    if let Ok(list) = std::env::var("DOUMATE_ORACLES")
        && !list.is_empty()
    {
        cfg.oracles = list.split(',').map(|s| s.trim().to_string()).collect();
        sources.oracles = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("DOUMATE_LOG")
        && !path.is_empty()
    {
        cfg.log_path = Some(path);
        sources.log_path = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seat: Option<String>,
    #[serde(default)]
    suggestions: Option<usize>,
    #[serde(default)]
    oracles: Option<Vec<String>>,
    #[serde(default)]
    log_path: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.suggestions == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: suggestions must be >=1".into(),
        ));
    }
    if let Some(seat) = &cfg.seat
        && !matches!(seat.as_str(), "landlord" | "up" | "down")
    {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown seat '{}'",
            seat
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.suggestions, 3);
        assert_eq!(cfg.oracles, vec!["greedy".to_string()]);
        assert!(cfg.seat.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_suggestions() {
        let cfg = Config {
            suggestions: 0,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_seat() {
        let cfg = Config {
            seat: Some("dealer".into()),
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_validate_accepts_known_seats() {
        for seat in ["landlord", "up", "down"] {
            let cfg = Config {
                seat: Some(seat.into()),
                ..Config::default()
            };
            assert!(validate(&cfg).is_ok());
        }
    }
}
