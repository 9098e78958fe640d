use crate::pattern::DEFAULT_CACHE_CAPACITY;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a placeholder capture requires at least one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaptureMode {
    #[default]
    OneOrMore,
    ZeroOrMore,
}

/// Where terminal conditions go: written to the response sink immediately, or
/// returned to the caller as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DispatchMode {
    #[default]
    Emit,
    Signal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherOptions {
    pub mode: DispatchMode,
    pub capture_mode: CaptureMode,
    pub allow_adjacent_params: bool,
    pub cache_patterns: bool,
    pub cache_capacity: usize,
}

impl Default for DispatcherOptions {
    fn default() -> Self {
        Self {
            mode: DispatchMode::default(),
            capture_mode: CaptureMode::default(),
            allow_adjacent_params: false,
            cache_patterns: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl DispatcherOptions {
    pub fn builder() -> DispatcherOptionsBuilder {
        DispatcherOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), DispatcherOptionsError> {
        if self.cache_patterns && self.cache_capacity == 0 {
            return Err(DispatcherOptionsError::CacheCapacityInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct DispatcherOptionsBuilder {
    options: DispatcherOptions,
}

impl DispatcherOptionsBuilder {
    pub fn mode(mut self, value: DispatchMode) -> Self {
        self.options.mode = value;
        self
    }

    pub fn capture_mode(mut self, value: CaptureMode) -> Self {
        self.options.capture_mode = value;
        self
    }

    pub fn allow_adjacent_params(mut self, value: bool) -> Self {
        self.options.allow_adjacent_params = value;
        self
    }

    pub fn cache_patterns(mut self, value: bool) -> Self {
        self.options.cache_patterns = value;
        self
    }

    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = value;
        self
    }

    pub fn build(self) -> Result<DispatcherOptions, DispatcherOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatcherOptionsError {
    #[error("cache_capacity must be at least 1 when pattern caching is enabled (got {provided})")]
    CacheCapacityInvalid { provided: usize },
}
