mod app;
mod audio;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod logging;
mod screens;
mod util;
mod widgets;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::Parser;
use std::io::{self, ErrorKind, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config_path = match cli::Command::from_parser(Parser::from_env())? {
        cli::Command::Run { config } => config,
        cli::Command::Help => {
            write!(io::stdout().lock(), "{}", cli::USAGE)?;
            return Ok(());
        }
        cli::Command::Version => {
            writeln!(io::stdout().lock(), "{}", cli::version())?;
            return Ok(());
        }
    };
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    logging::init(config.files.log_file.as_deref())?;
    let store = config.high_score_store()?;
    tracing::info!(high_score_file = %store.path().display(), "Starting gridsnake");
    let audio = config.audio_sink();
    let terminal = ratatui::init();
    let r = App::new(rand::rng(), Box::new(store), audio).run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
