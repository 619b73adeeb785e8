//! Draw-order strategies.
//!
//! A Sorter produces the back-to-front draw order of the visible scene,
//! either by rendering straight through the batch (`render_sorted`) or
//! by materializing an explicit list (`create_depth_list`) for multi-pass
//! replay and debug visualization. Exactly one strategy is active per
//! camera; the camera swaps it when the configured id changes and wires
//! its dirty flag to the world's change notifications.

mod no_sort;
mod topological_sort;
mod depth_value_sort;

pub use no_sort::NoSort;
pub use topological_sort::TopologicalSort;
pub use depth_value_sort::DepthValueSort;

use crate::camera::Camera;
use crate::error::StrataResult;
use crate::events::DirtyFlag;
use crate::render::{FrameShading, RenderBatch};
use crate::scene::{RenderStorage, SceneObject};
use crate::engine_warn;

/// Identifier of a draw-order strategy, selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SorterId {
    /// Storage order, no sorting
    NoSort,
    /// Coverage order derived from grid position
    Topological,
    /// Ascending scalar depth value
    DepthValue,
}

impl SorterId {
    /// Map the `depthSorter` configuration value to a strategy id.
    ///
    /// Unknown values fall back to NoSort so the camera always has
    /// exactly one active strategy.
    pub fn from_config(value: i32) -> SorterId {
        match value {
            0 => SorterId::NoSort,
            1 => SorterId::Topological,
            2 => SorterId::DepthValue,
            other => {
                engine_warn!(
                    "strata::Sorter",
                    "unknown sorter id {}, falling back to no-sort",
                    other
                );
                SorterId::NoSort
            }
        }
    }
}

/// Camera state a cached ordering is valid for.
///
/// Strategies rebuild their ordering when the stamp changes (the camera
/// moved or zoomed) or when their dirty flag was raised by a world event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStamp {
    position: (f32, f32),
    viewport: (i32, i32),
}

impl ViewStamp {
    /// Capture the ordering-relevant camera state
    pub fn of(camera: &Camera) -> Self {
        Self {
            position: (camera.position().x, camera.position().y),
            viewport: (
                camera.world_width_viewport(),
                camera.world_height_viewport(),
            ),
        }
    }
}

/// Draw-order strategy contract.
///
/// `&mut self` allows implementations to keep a cached ordering between
/// frames; the camera owns the strategy and drives invalidation through
/// the dirty flag.
pub trait Sorter: Send {
    /// Which strategy this is
    fn id(&self) -> SorterId;

    /// Shared flag the event bus raises on map/storage changes
    fn dirty_flag(&self) -> DirtyFlag;

    /// Order the visible scene and render it through the batch
    fn render_sorted(
        &mut self,
        camera: &Camera,
        storage: &dyn RenderStorage,
        batch: &mut dyn RenderBatch,
        shading: &FrameShading,
    ) -> StrataResult<()>;

    /// Produce the ordered draw list without rendering
    fn create_depth_list(
        &mut self,
        camera: &Camera,
        storage: &dyn RenderStorage,
        out: &mut Vec<SceneObject>,
    );
}

/// Instantiate the strategy for `id`
pub fn create_sorter(id: SorterId) -> Box<dyn Sorter> {
    match id {
        SorterId::NoSort => Box::new(NoSort::new()),
        SorterId::Topological => Box::new(TopologicalSort::new()),
        SorterId::DepthValue => Box::new(DepthValueSort::new()),
    }
}

#[cfg(test)]
#[path = "sorting_tests.rs"]
mod tests;
