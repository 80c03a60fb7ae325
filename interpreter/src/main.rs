// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{io, path::PathBuf, process::ExitCode};

use colored::Colorize;
use log::{debug, LevelFilter};
use logger::Logger;
use mscri_interpreter::{load_config, run_file, run_repl, ConsoleOutput, Interpreter};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to execute. Starts the interactive prompt when omitted.
    file: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Configuration file, `mscri.toml` by default.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

fn main() -> ExitCode {
    let args = Args::parse_args();
    Logger::initialize(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn });

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("{}: {e}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if config.log.debug {
        Logger::raise_level(LevelFilter::Debug);
    }

    let mut interpreter = Interpreter::with_config(ConsoleOutput::new(), config.lexer);

    match args.file {
        Some(path) => run_file(&mut interpreter, &path),
        None => {
            run_repl(&mut interpreter, io::stdin().lock(), io::stdout())?;
            Ok(())
        }
    }
}
