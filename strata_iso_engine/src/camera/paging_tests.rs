//! Unit tests for paging.rs
//!
//! Chunk-center tracking, the absolute-snap safety check, the loading
//! gate and the one-time radius shrink.

use crate::config::{ConfigValue, MemoryConfig};
use crate::events::EventBus;
use crate::map::{chunk, ChunkCoord, ChunkStore, MemoryChunkStore, Point};
use crate::render::ScreenRect;
use super::super::{Camera, GameWorld};

/// Config with chunk loading at construction disabled, so the paging
/// state under test starts untouched (loading radius 10)
fn quiet_config() -> MemoryConfig {
    let mut config = MemoryConfig::with_defaults();
    config.set("mapUseChunks", ConfigValue::Bool(false));
    config
}

fn camera_at(config: &MemoryConfig, map: &mut MemoryChunkStore, center: Point) -> Camera {
    let mut events = EventBus::new();
    let mut world = GameWorld {
        config,
        map,
        storage: None,
        lights: None,
        focus: None,
        events: &mut events,
    };
    Camera::with_center(&mut world, ScreenRect::new(0, 0, 800, 600), center)
}

// ============================================================================
// Incremental center tracking
// ============================================================================

#[test]
fn test_center_stays_for_small_movement() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    camera.position.x = 100.0;
    camera.update_center(&mut map, &config);

    assert_eq!(camera.center_chunk_x(), 0);
    assert_eq!(camera.center_chunk_y(), 0);
}

#[test]
fn test_right_border_crossing_increments_center() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    // right border reaches grid column 32 = (center+2) * 16
    camera.position.x = 3728.0;
    camera.update_center(&mut map, &config);

    assert_eq!(camera.center_chunk_x(), 1);
}

#[test]
fn test_left_border_crossing_decrements_center() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(
        &config,
        &mut map,
        Point::new(chunk::GAME_WIDTH + 512.0, 0.0, 0.0),
    );
    assert_eq!(camera.center_chunk_x(), 1);

    camera.position.x = 0.0;
    camera.update_center(&mut map, &config);

    assert_eq!(camera.center_chunk_x(), 0);
}

#[test]
fn test_teleport_snaps_to_absolute_center() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    // jump three chunks east; the incremental +-1 update cannot keep up
    camera.set_center(Point::new(3.0 * chunk::GAME_WIDTH + 100.0, 0.0, 0.0));
    camera.update_center(&mut map, &config);

    assert_eq!(camera.center_chunk_x(), 3);
}

#[test]
fn test_center_y_is_absolute() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    // two chunk depths south of the origin
    camera.position.y = -2.0 * chunk::VIEW_DEPTH as f32;
    camera.update_center(&mut map, &config);

    assert_eq!(camera.center_chunk_y(), 2);
}

// ============================================================================
// Loading gate
// ============================================================================

#[test]
fn test_gate_blocks_loading_away_from_origin() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(
        &config,
        &mut map,
        Point::new(5.0 * chunk::GAME_WIDTH + 1024.0, 0.0, 0.0),
    );
    assert_eq!(camera.center_chunk_x(), 5);

    camera.check_needed_chunks(&mut map, &config);

    assert_eq!(map.load_count(), 0);
    assert_eq!(camera.loading_radius(), 10);
}

#[test]
fn test_chunk_switch_flag_opens_the_gate() {
    let mut config = quiet_config();
    config.set("mapChunkSwitch", ConfigValue::Bool(true));
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(
        &config,
        &mut map,
        Point::new(5.0 * chunk::GAME_WIDTH + 1024.0, 0.0, 0.0),
    );

    camera.check_needed_chunks(&mut map, &config);

    assert!(map.load_count() > 0);
    assert!(map.has_chunk(ChunkCoord::new(5, 0)));
}

#[test]
fn test_loading_covers_radius_neighborhood() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    camera.check_needed_chunks(&mut map, &config);

    // x in -10..=10, y in -5..=5
    assert_eq!(map.load_count(), 21 * 11);
    assert!(map.has_chunk(ChunkCoord::new(-10, -5)));
    assert!(map.has_chunk(ChunkCoord::new(10, 5)));
    assert!(!map.has_chunk(ChunkCoord::new(11, 0)));
    assert!(!map.has_chunk(ChunkCoord::new(0, 6)));
}

#[test]
fn test_loading_is_idempotent_for_resident_chunks() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    map.load_chunk(ChunkCoord::new(0, 0));
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    camera.check_needed_chunks(&mut map, &config);

    // the resident chunk was requested once, at setup
    assert_eq!(map.load_count(), 21 * 11);
}

// ============================================================================
// Radius shrink
// ============================================================================

#[test]
fn test_radius_shrinks_exactly_once() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));
    assert_eq!(camera.loading_radius(), 10);

    camera.check_needed_chunks(&mut map, &config);
    assert_eq!(camera.loading_radius(), 2);

    camera.check_needed_chunks(&mut map, &config);
    assert_eq!(camera.loading_radius(), 2);

    // the shrunk radius loads a 5x5 neighborhood, already resident
    assert_eq!(map.load_count(), 21 * 11);
}

#[test]
fn test_shrunk_radius_loads_small_neighborhood() {
    let config = quiet_config();
    let mut map = MemoryChunkStore::new();
    let mut camera = camera_at(&config, &mut map, Point::new(0.0, 0.0, 0.0));

    camera.check_needed_chunks(&mut map, &config);
    map = MemoryChunkStore::new();
    camera.check_needed_chunks(&mut map, &config);

    // x in -2..=2, y in max(2, 2/2) = 2 -> -2..=2
    assert_eq!(map.load_count(), 5 * 5);
}
