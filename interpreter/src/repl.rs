// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, BufRead, Write};

use log::debug;
use mscri::SourceCode;

use crate::{Interpreter, Output};

pub const REPL_PATH: &str = "<repl>";

/// Reads lines from `input` until `exit` or the end of the input. The banner
/// and prompts are written to `prompt`; printed values go to the interpreter's output.
pub fn run_repl<O, R, W>(interpreter: &mut Interpreter<O>, input: R, mut prompt: W) -> io::Result<()>
        where O: Output, R: BufRead, W: Write {
    writeln!(prompt, "Mscri Interpreter v1.0 (Rust)")?;
    writeln!(prompt, "Type 'exit' to quit")?;
    writeln!(prompt)?;

    let mut lines = input.lines();
    loop {
        write!(prompt, "mscri> ")?;
        prompt.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input reached");
            break;
        };
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if line == "exit" {
            break;
        }

        if line.is_empty() {
            continue;
        }

        interpreter.run(&SourceCode::new(REPL_PATH, line));
    }

    writeln!(prompt, "Goodbye!")?;
    Ok(())
}
