/// No-sort strategy — renders in storage order.
///
/// Baseline strategy for scenes whose storage already iterates
/// back-to-front, and for measuring what sorting costs.

use crate::camera::Camera;
use crate::error::StrataResult;
use crate::events::DirtyFlag;
use crate::render::{FrameShading, RenderBatch};
use crate::scene::{RenderStorage, SceneObject};
use super::{Sorter, SorterId};

/// Renders the visible set exactly as the storage yields it.
pub struct NoSort {
    flag: DirtyFlag,
    scratch: Vec<SceneObject>,
}

impl NoSort {
    pub fn new() -> Self {
        Self {
            flag: DirtyFlag::new(),
            scratch: Vec::new(),
        }
    }
}

impl Default for NoSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Sorter for NoSort {
    fn id(&self) -> SorterId {
        SorterId::NoSort
    }

    fn dirty_flag(&self) -> DirtyFlag {
        self.flag.clone()
    }

    fn render_sorted(
        &mut self,
        camera: &Camera,
        storage: &dyn RenderStorage,
        batch: &mut dyn RenderBatch,
        shading: &FrameShading,
    ) -> StrataResult<()> {
        // nothing cached, so change notifications are drained and ignored
        let _ = self.flag.take();

        self.scratch.clear();
        storage.collect_visible(camera, &mut self.scratch);
        for object in &self.scratch {
            storage.draw_object(object.key, batch, shading)?;
        }
        Ok(())
    }

    fn create_depth_list(
        &mut self,
        camera: &Camera,
        storage: &dyn RenderStorage,
        out: &mut Vec<SceneObject>,
    ) {
        out.clear();
        storage.collect_visible(camera, out);
    }
}
