/// Configuration provider boundary.
///
/// The camera reads tuning values (leap radius, sorter selection, chunk
/// switches, fog color, ...) through typed lookups on a ConfigProvider.
/// The provider is a consumed collaborator; MemoryConfig is the shipped
/// in-memory implementation with the engine defaults registered.

use rustc_hash::FxHashMap;
use crate::engine_warn;

/// Read-only typed configuration lookups.
///
/// Lookups never fail: a missing key or a type mismatch yields the type
/// default so a frame can always proceed (the implementation should warn).
pub trait ConfigProvider: Send + Sync {
    /// Boolean value for `name`, or `false`
    fn value_b(&self, name: &str) -> bool;

    /// Integer value for `name`, or `0`
    fn value_i(&self, name: &str) -> i32;

    /// Float value for `name`, or `0.0`
    fn value_f(&self, name: &str) -> f32;
}

/// A single configuration value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

/// In-memory ConfigProvider backed by an FxHashMap.
///
/// `MemoryConfig::with_defaults()` registers every key the camera core
/// reads; `set` overrides at runtime (the sorter id, for example, may be
/// flipped between frames and the camera picks the change up on its next
/// update).
pub struct MemoryConfig {
    values: FxHashMap<String, ConfigValue>,
}

impl MemoryConfig {
    /// Create an empty configuration (every lookup warns and defaults)
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// Create a configuration with the engine defaults registered
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.set("mapUseChunks", ConfigValue::Bool(true));
        config.set("mapChunkSwitch", ConfigValue::Bool(false));
        config.set("depthSorter", ConfigValue::Int(2));
        config.set("cameraLeapRadius", ConfigValue::Int(40));
        config.set("renderResolutionWidth", ConfigValue::Int(480));
        config.set("enableAutoShade", ConfigValue::Bool(true));
        config.set("ambientOcclusion", ConfigValue::Float(0.5));
        config.set("fogR", ConfigValue::Float(0.3));
        config.set("fogG", ConfigValue::Float(0.4));
        config.set("fogB", ConfigValue::Float(1.0));
        config.set("enableLightEngine", ConfigValue::Bool(true));
        config.set("devDebugRendering", ConfigValue::Bool(false));
        config.set("singleBatchRendering", ConfigValue::Bool(true));
        config
    }

    /// Register or override a value
    pub fn set(&mut self, name: &str, value: ConfigValue) {
        self.values.insert(name.to_string(), value);
    }

    /// Remove a value. Returns true if the key existed.
    pub fn unset(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }

    fn missing(&self, name: &str, expected: &str) {
        engine_warn!(
            "strata::Config",
            "no {} value registered for '{}', using default",
            expected,
            name
        );
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ConfigProvider for MemoryConfig {
    fn value_b(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(ConfigValue::Bool(v)) => *v,
            _ => {
                self.missing(name, "bool");
                false
            }
        }
    }

    fn value_i(&self, name: &str) -> i32 {
        match self.values.get(name) {
            Some(ConfigValue::Int(v)) => *v,
            _ => {
                self.missing(name, "int");
                0
            }
        }
    }

    fn value_f(&self, name: &str) -> f32 {
        match self.values.get(name) {
            // integer values also answer float lookups
            Some(ConfigValue::Float(v)) => *v,
            Some(ConfigValue::Int(v)) => *v as f32,
            _ => {
                self.missing(name, "float");
                0.0
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
