/// Focus target boundary.
///
/// A camera can be locked to a movable entity. The entity lives in an
/// external registry; the camera only keeps a FocusKey and re-reads the
/// position every update, guarded by `has_position` (an entity may exist
/// without being spawned into the world yet).

use slotmap::new_key_type;
use crate::map::Point;

new_key_type! {
    /// Stable key for a focusable entity in an external registry.
    pub struct FocusKey;
}

/// Registry of focusable entities.
pub trait FocusRegistry: Send + Sync {
    /// Whether the entity exists and currently has a world position
    fn has_position(&self, key: FocusKey) -> bool;

    /// Current game-space position, None while unspawned or unknown
    fn position(&self, key: FocusKey) -> Option<Point>;

    /// Extent along the height axis, game units
    fn height(&self, key: FocusKey) -> f32;

    /// Display name for diagnostics
    fn name(&self, key: FocusKey) -> String;

    /// Translate the entity in game space (used by Camera::move_by while
    /// the camera is locked to it)
    fn translate(&mut self, key: FocusKey, dx: f32, dy: f32);
}
