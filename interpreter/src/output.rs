// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, ErrorKind, Stderr, Stdout, Write};

use log::{trace, warn};
use mscri::{SourceCode, Value};

use crate::{ErrorPrinter, RuntimeDiagnostic};

/// Receives everything an interpreter session produces. The defaults discard it.
pub trait Output {
    fn begin_source(&mut self, source_code: &SourceCode) { _ = source_code }

    /// Called once per `print` statement.
    fn print(&mut self, value: &Value) { _ = value }

    fn diagnostic(&mut self, diagnostic: &RuntimeDiagnostic) { _ = diagnostic }
}

impl Output for () {
}

/// Printed values go to stdout, diagnostics to stderr. A closed pipe is not an
/// error: whatever is printed afterwards is dropped.
#[derive(Debug)]
pub struct ConsoleOutput<W = Stdout, E = Stderr> {
    source_code: Option<SourceCode>,
    stdout: W,
    stderr: E,
}

impl ConsoleOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, E: Write> ConsoleOutput<W, E> {
    #[must_use]
    pub fn with_writers(stdout: W, stderr: E) -> Self {
        Self {
            source_code: None,
            stdout,
            stderr,
        }
    }

    #[must_use]
    pub fn into_writers(self) -> (W, E) {
        (self.stdout, self.stderr)
    }
}

impl<W: Write, E: Write> Output for ConsoleOutput<W, E> {
    fn begin_source(&mut self, source_code: &SourceCode) {
        self.source_code = Some(source_code.clone());
    }

    fn print(&mut self, value: &Value) {
        let result = writeln!(self.stdout, "{value}").and_then(|()| self.stdout.flush());
        report_write_error(result);
    }

    fn diagnostic(&mut self, diagnostic: &RuntimeDiagnostic) {
        let result = match &self.source_code {
            Some(source_code) => {
                ErrorPrinter::new(source_code, diagnostic.range(), diagnostic)
                    .hint(diagnostic.hint())
                    .write_to(&mut self.stderr)
            }
            None => writeln!(self.stderr, "error: {diagnostic}"),
        };
        report_write_error(result);
    }
}

fn report_write_error(result: io::Result<()>) {
    match result {
        Ok(()) => (),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => trace!("Output pipe is closed"),
        Err(e) => warn!("Failed to write output: {e}"),
    }
}

#[derive(Debug, Default, Clone)]
pub struct CapturedOutput {
    printed: Vec<String>,
    diagnostics: Vec<String>,
}

impl CapturedOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn printed_lines(&self) -> &[String] {
        &self.printed
    }

    /// Everything printed, each line terminated by a newline.
    #[must_use]
    pub fn stdout(&self) -> String {
        self.printed.iter().map(|line| format!("{line}\n")).collect()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

impl Output for CapturedOutput {
    fn print(&mut self, value: &Value) {
        self.printed.push(value.to_string());
    }

    fn diagnostic(&mut self, diagnostic: &RuntimeDiagnostic) {
        self.diagnostics.push(diagnostic.to_string());
    }
}
