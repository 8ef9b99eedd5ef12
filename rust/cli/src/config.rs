use pig_engine::engine::{DEFAULT_WIN_THRESHOLD, MIN_PLAYERS};
use serde::{Deserialize, Serialize};
use std::fs;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "PIG_CONFIG";
pub const TARGET_ENV: &str = "PIG_TARGET";
pub const PLAYERS_ENV: &str = "PIG_PLAYERS";
pub const SEED_ENV: &str = "PIG_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Winning threshold
    pub target: u32,
    /// Player count; `None` means ask at the start of every game
    pub players: Option<u8>,
    /// Die seed; `None` means draw one per session
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub target: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            target: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
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
            target: DEFAULT_WIN_THRESHOLD,
            players: None,
            seed: None,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

/// Resolve configuration: defaults, then the `PIG_CONFIG` file, then
/// `PIG_*` environment variables. Command-line flags are applied by the
/// caller on top of this.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.target {
            cfg.target = v;
            sources.target = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = Some(v);
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(target) = std::env::var(TARGET_ENV)
        && !target.is_empty()
    {
        cfg.target = target
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{} is not a number", TARGET_ENV)))?;
        sources.target = ValueSource::Env;
    }
    if let Ok(players) = std::env::var(PLAYERS_ENV)
        && !players.is_empty()
    {
        cfg.players = Some(
            players
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{} is not a number", PLAYERS_ENV)))?,
        );
        sources.players = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("{} is not a number", SEED_ENV)))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    target: Option<u32>,
    #[serde(default)]
    players: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.target == 0 {
        return Err(ConfigError::Invalid("target must be >0".into()));
    }
    if let Some(n) = cfg.players
        && usize::from(n) < MIN_PLAYERS
    {
        return Err(ConfigError::Invalid(format!(
            "players must be >={}",
            MIN_PLAYERS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [CONFIG_ENV, TARGET_ENV, PLAYERS_ENV, SEED_ENV] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.target, 100);
        assert_eq!(resolved.sources.target, ValueSource::Default);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn file_then_env_precedence() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target = 50\nplayers = 3\nseed = 7").unwrap();
        unsafe {
            std::env::set_var(CONFIG_ENV, file.path());
            std::env::set_var(SEED_ENV, "99");
        }

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.target, 50);
        assert_eq!(resolved.sources.target, ValueSource::File);
        assert_eq!(resolved.config.players, Some(3));
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
    }

    #[test]
    #[serial]
    fn rejects_zero_target_and_lonely_tables() {
        clear_env();
        unsafe {
            std::env::set_var(TARGET_ENV, "0");
        }
        assert!(matches!(load_with_sources(), Err(ConfigError::Invalid(_))));

        clear_env();
        unsafe {
            std::env::set_var(PLAYERS_ENV, "1");
        }
        let err = load_with_sources().unwrap_err();
        clear_env();
        assert!(err.to_string().contains("players must be >=2"));
    }

    #[test]
    #[serial]
    fn rejects_garbage_env_and_unknown_keys() {
        clear_env();
        unsafe {
            std::env::set_var(SEED_ENV, "abc");
        }
        assert!(matches!(load_with_sources(), Err(ConfigError::Invalid(_))));
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = 20000").unwrap();
        unsafe {
            std::env::set_var(CONFIG_ENV, file.path());
        }
        let err = load_with_sources().unwrap_err();
        clear_env();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
