use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rdg::app::App;
use rdg::cli::Command;
use rdg::config::Config;
use rdg::error::DungeonError;
use speculoos::prelude::*;

mod common;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rdg-{}-{}.svg", std::process::id(), name))
}

#[test]
fn test_run_writes_dungeon() {
    let path = scratch_path("dungeon");
    let config = Config {
        tiles: 30,
        seed: Some(11),
        output: Some(path.clone()),
        ..Config::default()
    };

    let written = App::new(config, Command::Dungeon).run().unwrap();
    assert_eq!(written, path);

    let svg = fs::read_to_string(&path).unwrap();
    assert_that(&svg.starts_with("<svg ")).is_true();
    assert_that(&svg.ends_with("</svg>\n")).is_true();
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_run_writes_maze() {
    let path = scratch_path("maze");
    let config = Config {
        maze_cells: 16,
        seed: Some(2),
        output: Some(path.clone()),
        ..Config::default()
    };

    App::new(config, Command::Maze).run().unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert_that(&svg.starts_with("<svg width=\"40\" height=\"50\"")).is_true();
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_same_seed_same_document() {
    let app = App::new(Config::default(), Command::Dungeon);
    let first = app.render(&mut common::rng(77)).unwrap();
    let second = app.render(&mut common::rng(77)).unwrap();
    assert_eq!(first, second);

    let maze = App::new(Config::default(), Command::Maze);
    assert_eq!(
        maze.render(&mut common::rng(5)).unwrap(),
        maze.render(&mut common::rng(5)).unwrap()
    );
}

#[test]
fn test_unwritable_output_is_io_error() {
    let config = Config {
        tiles: 3,
        seed: Some(1),
        output: Some(std::env::temp_dir().join("rdg-missing-dir").join("nested").join("out.svg")),
        ..Config::default()
    };

    let result = App::new(config, Command::Dungeon).run();
    assert_that(&matches!(result, Err(DungeonError::Io(_)))).is_true();
}

#[test]
fn test_app_keeps_config_and_command() {
    let config = Config {
        tiles: 12,
        ..Config::default()
    };
    let app = App::new(config.clone(), Command::Maze);

    assert_eq!(app.config(), &config);
    assert_eq!(app.command(), Command::Maze);
    assert_eq!(app.config().output_for(app.command()), PathBuf::from("Dungeon_Maze.svg"));
}
