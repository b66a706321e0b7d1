use std::path::PathBuf;

use clap::{ArgAction, Parser};
use mazegen::{algorithms::Algorithm, gameboard::Maze, solver::Solution, SaveFormat};

use crate::{error::AppError, settings::Settings};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazer")]
pub struct Args {
    #[clap(long, value_name = "PATH", help = "Use this settings file instead of the default one")]
    pub config: Option<PathBuf>,
    #[clap(short, long, action = ArgAction::Count, help = "Log more, can be repeated")]
    pub verbose: u8,
    #[clap(short, long, action = ArgAction::Count, help = "Log less, can be repeated")]
    pub quiet: u8,

    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    pub debug_config: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,

    #[clap(
        short,
        long,
        num_args = 0..=2,
        value_names = ["WIDTH", "HEIGHT"],
        conflicts_with = "load",
        help = "Generate a new maze, size defaults to the one in settings"
    )]
    pub generate: Option<Vec<i32>>,
    #[clap(short, long, requires = "generate", help = "Seed for the generator")]
    pub seed: Option<u64>,
    #[clap(
        short,
        long,
        requires = "generate",
        help = "backtracker, prim, division or division-stack"
    )]
    pub algorithm: Option<Algorithm>,
    #[clap(short, long, value_name = "FILE", help = "Load a maze saved in binary format")]
    pub load: Option<PathBuf>,

    #[clap(long, action, help = "Find the path from the top left to the bottom right corner")]
    pub solve: bool,
    #[clap(long, value_name = "FILE", help = "Save the maze in binary format")]
    pub save_binary: Option<PathBuf>,
    #[clap(long, value_name = "FILE", help = "Save the maze as an svg picture")]
    pub save_svg: Option<PathBuf>,
}

impl Args {
    /// Settings file given on the command line, or the platform default.
    pub fn settings_path(&self) -> Result<PathBuf, AppError> {
        self.config
            .clone()
            .or_else(Settings::default_path)
            .ok_or(AppError::NoConfigDir)
    }
}

/// Runs the maze actions in order: build, solve, save.
pub fn run(args: &Args, settings: &Settings) -> Result<(), AppError> {
    let mut maze = build(args, settings)?;

    if args.solve {
        match mazegen::solve(&mut maze)? {
            Solution::Reachable(path) => {
                println!("Solved, path is {} cells long", path.len());
            }
            Solution::Unreachable { reached, partial } => {
                println!("No solution, reached {reached} cells");
                log::info!("closest partial path: {:?}", partial);
            }
        }
    }

    if let Some(path) = &args.save_binary {
        mazegen::save(&mut maze, path, SaveFormat::Binary)?;
    }
    if let Some(path) = &args.save_svg {
        mazegen::save(&mut maze, path, SaveFormat::Svg(&settings.svg))?;
    }

    Ok(())
}

fn build(args: &Args, settings: &Settings) -> Result<Maze, AppError> {
    match (&args.generate, &args.load) {
        (Some(size), None) => {
            let (width, height) = match size.as_slice() {
                [] => (settings.default_width, settings.default_height),
                &[width, height] => (width, height),
                _ => return Err(AppError::PartialSize),
            };
            let algorithm = args.algorithm.unwrap_or(settings.default_algorithm);

            let generated =
                mazegen::generate(width, height, args.seed, algorithm, &settings.limits)?;
            if args.seed.is_none() {
                println!("Seed: {}", generated.seed);
            }
            Ok(generated.maze)
        }
        (None, Some(path)) => Ok(mazegen::load(path, &settings.limits)?),
        _ => Err(AppError::NoSource),
    }
}
