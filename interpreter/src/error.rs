// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, io::{self, Write}, path::PathBuf};

use colored::{Color, ColoredString, Colorize};
use mscri::{FileRange, SourceCode};

/// Renders a message together with the offending source line.
pub struct ErrorPrinter {
    source_code: SourceCode,
    range: FileRange,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `write_to` method to actually print"]
    pub fn new(source_code: &SourceCode, range: FileRange, message: impl Display) -> Self {
        Self {
            source_code: source_code.clone(),
            range,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: format!("{}", range.start().line() + 1).blue().bold(),
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.write_prelude(w)?;

        self.write_lines(w)?;

        self.write_postlude(w)
    }

    fn write_prelude<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}: {}", "error".red().bold(), self.message.bold())?;
        writeln!(w)
    }

    /// The line of the range, surrounded by its non-empty neighbours.
    fn write_lines<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let line_index = self.range.start().line();
        let first = line_index.saturating_sub(1);

        for (index, line) in self.source_code.lines().enumerate().skip(first).take(line_index - first + 2) {
            if index == line_index {
                self.write_line(w, true, line)?;
                self.write_error_indicator(w)?;
            } else if !line.trim().is_empty() {
                self.write_line(w, false, line)?;
            }
        }

        Ok(())
    }

    fn write_line<W: Write>(&self, w: &mut W, is_primary: bool, line: &str) -> io::Result<()> {
        self.write_line_prefix(w, is_primary)?;
        writeln!(w, "{line}")
    }

    fn write_error_indicator<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let spaces = " ".repeat(self.range.start().column());
        let caret = "^".color(self.color).bold();
        let tildes = "~".repeat(self.range.len().saturating_sub(1)).color(self.color);

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.write_line_prefix(w, false)?;
        writeln!(w, "{spaces}{caret}{tildes} {hint}")
    }

    fn write_line_prefix<W: Write>(&self, w: &mut W, is_primary: bool) -> io::Result<()> {
        let separator = " | ".blue().bold();

        if is_primary {
            write!(w, "{} {separator}", self.line_number)
        } else {
            write!(w, "{} {separator}", " ".repeat(self.line_number.len()))
        }
    }

    fn write_postlude<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{}\n", self.location())
    }

    /// `In path:line:column`, with one-based line and column.
    #[must_use]
    pub fn location(&self) -> String {
        let path = self.source_code.path().display();
        let line = self.range.start().line() + 1;
        let column = self.range.start().column() + 1;

        format!("In {path}:{line}:{column}")
    }
}

/// A problem found while executing. Execution always continues afterwards.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeDiagnostic {
    #[error("Variable '{name}' not defined")]
    UndefinedVariable {
        name: String,
        range: FileRange,
    },
}

impl RuntimeDiagnostic {
    #[must_use]
    pub fn range(&self) -> FileRange {
        match self {
            Self::UndefinedVariable { range, .. } => *range,
        }
    }

    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UndefinedVariable { name, .. } => Some(format!("bind it first using `let {name} = ...`")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file '{}'", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
