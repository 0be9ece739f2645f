use std::{collections::HashMap, env};

/// Source of environment variables, looked up on every call.
pub trait EnvironmentSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the live process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed set of variables, independent of the process environment.
#[derive(Debug, Default, Clone)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvironmentSource for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Trimmed value of `key`, or `None` when unset or blank.
pub fn non_empty(source: &dyn EnvironmentSource, key: &str) -> Option<String> {
    source
        .var(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Serializes tests that mutate the process environment.
#[cfg(test)]
pub(crate) static PROCESS_ENV_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());
