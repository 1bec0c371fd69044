mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::cli::{Arguments, Cli};
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Cli::from_parser(lexopt::Parser::from_env()) {
        Ok(Cli::Run(args)) => args,
        Ok(Cli::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Cli::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    if let Some(path) = args.log_file {
        config.log.file = Some(path);
    }
    let logfile = logging::init(&config.log).context("failed to set up logging")?;
    if let Some(path) = logfile {
        log::info!(
            "Starting gridsnake {}; logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        );
    }
    let rng = match args.seed {
        Some(seed) => {
            log::info!("Using RNG seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let terminal = ratatui::init();
    let r = App::new(Game::new(rng)).run(terminal);
    ratatui::restore();
    log::info!("Exiting");
    r.context("error while running game")
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
