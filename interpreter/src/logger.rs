// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger;

impl Logger {
    pub fn initialize(level: LevelFilter) {
        let logger = Box::leak(Box::new(Logger));

        log::set_max_level(level);
        log::set_logger(logger).expect("Failed to install the logger");
        log::debug!("Logger installed at level {level}");
    }

    pub fn raise_level(level: LevelFilter) {
        if level > log::max_level() {
            log::set_max_level(level);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args());
        }
    }

    fn flush(&self) {}
}
