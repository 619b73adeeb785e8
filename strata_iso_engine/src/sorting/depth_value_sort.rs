/// Depth-value strategy — radix sort on a scalar draw key.
///
/// Every object maps to one f32 depth value (see
/// `SceneObject::depth_value`); ascending order is back-to-front. The
/// sort runs over an order-preserving u32 image of the float key so the
/// radix passes never touch float comparison.

use rdst::{RadixKey, RadixSort};

use crate::camera::Camera;
use crate::error::StrataResult;
use crate::events::DirtyFlag;
use crate::render::{FrameShading, RenderBatch};
use crate::scene::{RenderStorage, SceneObject};
use super::{Sorter, SorterId, ViewStamp};

/// Map an f32 to a u32 with the same total order.
///
/// Negative floats have descending bit patterns; flipping all bits for
/// them and the sign bit for non-negatives makes the unsigned comparison
/// agree with the float one.
fn depth_key(depth: f32) -> u32 {
    let bits = depth.to_bits();
    if bits & 0x8000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000
    }
}

/// Sortable record: precomputed key image plus the object snapshot
#[derive(Debug, Clone, Copy)]
struct DepthEntry {
    key_bits: u32,
    object: SceneObject,
}

impl RadixKey for DepthEntry {
    const LEVELS: usize = 4;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self.key_bits >> (level * 8)) as u8
    }
}

/// Ascending depth-value ordering, cached between frames.
pub struct DepthValueSort {
    flag: DirtyFlag,
    entries: Vec<DepthEntry>,
    scratch: Vec<SceneObject>,
    last_view: Option<ViewStamp>,
}

impl DepthValueSort {
    pub fn new() -> Self {
        Self {
            flag: DirtyFlag::new(),
            entries: Vec::new(),
            scratch: Vec::new(),
            last_view: None,
        }
    }

    fn ensure_sorted(&mut self, camera: &Camera, storage: &dyn RenderStorage) {
        let stamp = ViewStamp::of(camera);
        if self.flag.take() || self.last_view != Some(stamp) {
            self.scratch.clear();
            storage.collect_visible(camera, &mut self.scratch);

            self.entries.clear();
            self.entries.extend(self.scratch.iter().map(|object| DepthEntry {
                key_bits: depth_key(object.depth_value()),
                object: *object,
            }));
            self.entries.radix_sort_unstable();

            self.last_view = Some(stamp);
        }
    }
}

impl Default for DepthValueSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Sorter for DepthValueSort {
    fn id(&self) -> SorterId {
        SorterId::DepthValue
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
        for entry in &self.entries {
            storage.draw_object(entry.object.key, batch, shading)?;
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
        out.extend(self.entries.iter().map(|entry| entry.object));
    }
}
