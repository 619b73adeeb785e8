/// Topological strategy — coverage order from grid position.
///
/// In this projection a sprite is covered by sprites on rows nearer the
/// viewer, by taller sprites in its own column, and nothing else. Sorting
/// by (ground row, height, x) therefore linearizes the coverage relation
/// without building the graph explicitly.

use crate::camera::Camera;
use crate::error::StrataResult;
use crate::events::DirtyFlag;
use crate::render::{FrameShading, RenderBatch};
use crate::scene::{RenderStorage, SceneObject};
use super::{Sorter, SorterId, ViewStamp};

/// Back-to-front ordering by grid coverage, cached between frames.
pub struct TopologicalSort {
    flag: DirtyFlag,
    cache: Vec<SceneObject>,
    last_view: Option<ViewStamp>,
}

impl TopologicalSort {
    pub fn new() -> Self {
        Self {
            flag: DirtyFlag::new(),
            cache: Vec::new(),
            last_view: None,
        }
    }

    fn ensure_sorted(&mut self, camera: &Camera, storage: &dyn RenderStorage) {
        let stamp = ViewStamp::of(camera);
        if self.flag.take() || self.last_view != Some(stamp) {
            self.cache.clear();
            storage.collect_visible(camera, &mut self.cache);
            self.cache.sort_by(|a, b| {
                a.position
                    .y
                    .total_cmp(&b.position.y)
                    .then(a.position.z.total_cmp(&b.position.z))
                    .then(a.position.x.total_cmp(&b.position.x))
            });
            self.last_view = Some(stamp);
        }
    }
}

impl Default for TopologicalSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Sorter for TopologicalSort {
    fn id(&self) -> SorterId {
        SorterId::Topological
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
        self.ensure_sorted(camera, storage);
        for object in &self.cache {
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
        self.ensure_sorted(camera, storage);
        out.clear();
        out.extend_from_slice(&self.cache);
    }
}
