// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::ErrorKind, path::Path};

use log::debug;
use mscri::ConfigRoot;

use crate::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "mscri.toml";

/// Loads the configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] when no
/// path is given. Only the default file may be absent.
pub fn load_config(path: Option<&Path>) -> Result<ConfigRoot, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if !required && e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(ConfigRoot::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse_config(path, &contents)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<ConfigRoot, ConfigError> {
    let config: ConfigRoot = toml::from_str(contents).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded config from {}: {config:?}", path.display());
    Ok(config)
}
