use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use rand::RngCore;
use tracing::{debug, info, instrument};

use crate::cli::Command;
use crate::config::Config;
use crate::error::DungeonResult;
use crate::map::builder::DungeonMap;
use crate::map::maze::Maze;
use crate::map::render::{DungeonRenderer, MazeRenderer};
use crate::rng;

/// One generator run: seed, generate, render and write.
pub struct App {
    config: Config,
    command: Command,
}

impl App {
    pub fn new(config: Config, command: Command) -> Self {
        App { config, command }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Generates the requested structure from `rng` and returns its SVG markup.
    pub fn render<R: RngCore + ?Sized>(&self, rng: &mut R) -> DungeonResult<String> {
        let svg = match self.command {
            Command::Dungeon => {
                let map = DungeonMap::generate(self.config.tiles, rng)?;
                if let Some((min, max)) = map.bounds() {
                    debug!(%min, %max, "Dungeon bounds");
                }
                DungeonRenderer::render(&map)?
            }
            Command::Maze => {
                let maze = Maze::generate(self.config.maze_cells, rng);
                debug!(width = maze.width(), height = maze.height(), "Maze dimensions");
                MazeRenderer::render(&maze)?
            }
        };
        Ok(svg)
    }

    /// Runs the command and writes the document, returning the path written.
    ///
    /// A missing seed is replaced by a fresh one, which is logged so the run can be repeated.
    #[instrument(skip_all, fields(command = %self.command))]
    pub fn run(&self) -> DungeonResult<PathBuf> {
        let seed = self.config.seed.unwrap_or_else(rng::random_seed);
        info!(seed, "Seeded random number generator");
        let mut rng = rng::seeded(seed);

        let svg = self.render(&mut rng)?;

        let path = self.config.output_for(self.command);
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;

        info!(path = %path.display(), bytes = svg.len(), "Wrote SVG document");
        Ok(path)
    }
}
