// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use log::debug;
use mscri::Value;

/// The single namespace of an interpreter session. There is no nesting and a
/// binding is never removed.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the bound value, so later assignments never change it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }

    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        debug!("Binding `{name}` to {value:?}");

        if let Some(previous) = self.variables.insert(name, value) {
            debug!("Replaced previous value {previous:?}");
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
