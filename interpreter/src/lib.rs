// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod environment;
mod error;
mod interpreter;
mod output;
mod repl;

use std::path::Path;

use anyhow::Context;
use mscri::SourceCode;

pub use self::{
    config::{load_config, parse_config, DEFAULT_CONFIG_PATH},
    environment::Environment,
    error::{ConfigError, ErrorPrinter, RuntimeDiagnostic},
    interpreter::Interpreter,
    output::{CapturedOutput, ConsoleOutput, Output},
    repl::{run_repl, REPL_PATH},
};

/// Reads the whole file and executes it.
pub fn run_file<O: Output>(interpreter: &mut Interpreter<O>, path: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot open file '{}'", path.display()))?;

    interpreter.run(&SourceCode::new(path, contents));
    Ok(())
}
