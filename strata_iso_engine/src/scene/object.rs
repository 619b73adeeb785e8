/// Renderable object snapshots.
///
/// Sort strategies work on SceneObject records: the storage key plus the
/// position captured at collection time. Keeping a copy of the position
/// makes an ordering pass independent of storage mutation during the
/// frame.

use slotmap::new_key_type;
use crate::map::{cell, Point};

new_key_type! {
    /// Stable key for a renderable object within its RenderStorage.
    ///
    /// Keys remain valid even after other objects are removed.
    pub struct ObjectKey;
}

/// Snapshot of one renderable object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Key back into the storage that produced this snapshot
    pub key: ObjectKey,
    /// Game-space position at collection time
    pub position: Point,
}

impl SceneObject {
    /// Create a snapshot
    pub fn new(key: ObjectKey, position: Point) -> Self {
        Self { key, position }
    }

    /// Scalar draw key: larger values are nearer the viewer and draw later.
    ///
    /// The ground row dominates; height contributes less than one row
    /// step, so stacked cells never reorder across rows.
    pub fn depth_value(&self) -> f32 {
        self.position.y * cell::PROJECTION_FACTOR_Y
            + self.position.z * (cell::PROJECTION_FACTOR_Z / cell::VIEW_HEIGHT as f32)
    }
}
