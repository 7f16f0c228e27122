use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Board geometry and timing
    #[serde(default)]
    pub(crate) game: GameConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("torusnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.  Out-of-range values are rejected during
    /// deserialization.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Gameplay settings from the `[game]` table
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of columns on the board
    pub(crate) cols: u16,

    /// Number of rows on the board
    pub(crate) rows: u16,

    /// Milliseconds between movements of the snake
    tick_ms: u64,
}

impl GameConfig {
    /// Construct a `GameConfig`, rejecting out-of-range values
    pub(crate) fn new(
        cols: u16,
        rows: u16,
        tick_ms: u64,
    ) -> Result<GameConfig, InvalidConfigError> {
        if !(consts::MIN_BOARD_DIM..=consts::MAX_BOARD_COLS).contains(&cols) {
            return Err(InvalidConfigError {
                key: "cols",
                value: cols.into(),
                min: consts::MIN_BOARD_DIM.into(),
                max: consts::MAX_BOARD_COLS.into(),
            });
        }
        if !(consts::MIN_BOARD_DIM..=consts::MAX_BOARD_ROWS).contains(&rows) {
            return Err(InvalidConfigError {
                key: "rows",
                value: rows.into(),
                min: consts::MIN_BOARD_DIM.into(),
                max: consts::MAX_BOARD_ROWS.into(),
            });
        }
        if !(consts::MIN_TICK_MS..=consts::MAX_TICK_MS).contains(&tick_ms) {
            return Err(InvalidConfigError {
                key: "tick-ms",
                value: tick_ms,
                min: consts::MIN_TICK_MS,
                max: consts::MAX_TICK_MS,
            });
        }
        Ok(GameConfig {
            cols,
            rows,
            tick_ms,
        })
    }

    /// Time between movements of the snake
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            cols: consts::DEFAULT_BOARD_COLS,
            rows: consts::DEFAULT_BOARD_ROWS,
            tick_ms: consts::DEFAULT_TICK_MS,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    cols: u16,
    rows: u16,
    tick_ms: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            cols: consts::DEFAULT_BOARD_COLS,
            rows: consts::DEFAULT_BOARD_ROWS,
            tick_ms: consts::DEFAULT_TICK_MS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidConfigError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidConfigError> {
        GameConfig::new(value.cols, value.rows, value.tick_ms)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{key} must be between {min} and {max}, got {value}")]
pub(crate) struct InvalidConfigError {
    key: &'static str,
    value: u64,
    min: u64,
    max: u64,
}
