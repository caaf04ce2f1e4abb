use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::{Figment, Provider};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Command;
use crate::constants::{DEFAULT_DUNGEON_OUTPUT, DEFAULT_MAZE_CELLS, DEFAULT_MAZE_OUTPUT, DEFAULT_TILE_COUNT, ENV_PREFIX};
use crate::error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of tiles in a generated dungeon
    pub tiles: usize,
    /// Number of cells in a generated maze
    pub maze_cells: usize,
    /// Seed for the random number generator - if None, a fresh seed is picked per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Output path - if None, a default name is chosen per command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tiles: DEFAULT_TILE_COUNT,
            maze_cells: DEFAULT_MAZE_CELLS,
            seed: None,
            output: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with `RDG_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration, letting `overrides` (usually the command line) win over the
    /// environment, and validates it.
    pub fn load<P: Provider>(overrides: P) -> Result<Config, ConfigError> {
        let config: Config = Self::figment().merge(overrides).extract()?;
        config.validate()?;

        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Rejects empty dungeons and mazes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiles == 0 {
            return Err(ConfigError::Invalid("tiles must be at least 1".to_string()));
        }
        if self.maze_cells == 0 {
            return Err(ConfigError::Invalid("maze_cells must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The file a command writes to.
    pub fn output_for(&self, command: Command) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            match command {
                Command::Dungeon => DEFAULT_DUNGEON_OUTPUT,
                Command::Maze => DEFAULT_MAZE_OUTPUT,
            }
            .into()
        })
    }
}
