//! Unit tests for config.rs

use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_cover_camera_keys() {
    let config = MemoryConfig::with_defaults();

    assert!(config.value_b("mapUseChunks"));
    assert!(!config.value_b("mapChunkSwitch"));
    assert_eq!(config.value_i("depthSorter"), 2);
    assert_eq!(config.value_i("cameraLeapRadius"), 40);
    assert_eq!(config.value_i("renderResolutionWidth"), 480);
    assert!(config.value_b("enableAutoShade"));
    assert_eq!(config.value_f("ambientOcclusion"), 0.5);
    assert!(config.value_b("enableLightEngine"));
    assert!(!config.value_b("devDebugRendering"));
    assert!(config.value_b("singleBatchRendering"));
}

#[test]
fn test_default_trait_uses_defaults() {
    let config = MemoryConfig::default();
    assert_eq!(config.value_i("renderResolutionWidth"), 480);
}

// ============================================================================
// Set / unset
// ============================================================================

#[test]
fn test_set_overrides_value() {
    let mut config = MemoryConfig::with_defaults();
    config.set("depthSorter", ConfigValue::Int(0));
    assert_eq!(config.value_i("depthSorter"), 0);
}

#[test]
fn test_unset_removes_value() {
    let mut config = MemoryConfig::with_defaults();
    assert!(config.unset("depthSorter"));
    assert!(!config.unset("depthSorter"));
    assert_eq!(config.value_i("depthSorter"), 0);
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_missing_key_yields_type_default() {
    let config = MemoryConfig::new();
    assert!(!config.value_b("nothing"));
    assert_eq!(config.value_i("nothing"), 0);
    assert_eq!(config.value_f("nothing"), 0.0);
}

#[test]
fn test_type_mismatch_yields_type_default() {
    let mut config = MemoryConfig::new();
    config.set("flag", ConfigValue::Bool(true));
    assert_eq!(config.value_i("flag"), 0);
}

#[test]
fn test_int_answers_float_lookup() {
    let mut config = MemoryConfig::new();
    config.set("cameraLeapRadius", ConfigValue::Int(40));
    assert_eq!(config.value_f("cameraLeapRadius"), 40.0);
}
