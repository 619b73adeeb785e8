/// Chunk paging around the camera center.
///
/// The center chunk moves incrementally when a visible border crosses a
/// chunk boundary; a safety check snaps it to the absolute position when
/// the incremental step would be off by more than one chunk (teleports,
/// extreme shakes). The y coordinate is always recomputed absolutely.

use crate::config::ConfigProvider;
use crate::map::{chunk, ChunkCoord, ChunkStore};
use super::Camera;

impl Camera {
    /// Check whether the center chunk moved and trigger chunk loading
    /// when it did.
    pub fn update_center(&mut self, map: &mut dyn ChunkStore, config: &dyn ConfigProvider) {
        let old_x = self.center_chunk_x;

        // chunk switch left
        if self.visible_left_border() < (self.center_chunk_x - 1) * chunk::BLOCKS_X {
            self.center_chunk_x -= 1;
        }

        // chunk switch right
        if self.visible_right_border() >= (self.center_chunk_x + 2) * chunk::BLOCKS_X {
            self.center_chunk_x += 1;
        }

        // the relative move breaks down across discontinuities; fall back
        // to the absolute position of the center
        let dx_movement = self.center().chunk_x() - old_x;
        if dx_movement * dx_movement > 1 {
            self.center_chunk_x = self.center().chunk_x();
        }

        // y is calculated absolutely
        self.center_chunk_y = (-self.position.y / chunk::VIEW_DEPTH as f32).floor() as i32;

        if self.last_center_x != self.center_chunk_x || self.last_center_y != self.center_chunk_y {
            self.last_center_x = self.center_chunk_x;
            self.last_center_y = self.center_chunk_y;
            self.check_needed_chunks(map, config);
        }
    }

    /// Request loads for the missing chunks around the center.
    ///
    /// Policy, preserved as specified: the body only runs when centered
    /// on the origin chunk or when `mapChunkSwitch` is enabled. The
    /// loading radius shrinks to 2 after the first pass and never grows
    /// back.
    pub(crate) fn check_needed_chunks(
        &mut self,
        map: &mut dyn ChunkStore,
        config: &dyn ConfigProvider,
    ) {
        if (self.center_chunk_x == 0 && self.center_chunk_y == 0)
            || config.value_b("mapChunkSwitch")
        {
            for x in -self.loading_radius..=self.loading_radius {
                let y_radius = (self.loading_radius / 2).max(2);
                for y in -y_radius..=y_radius {
                    let coord =
                        ChunkCoord::new(self.center_chunk_x + x, self.center_chunk_y + y);
                    if !map.has_chunk(coord) {
                        map.load_chunk(coord);
                    }
                }
            }
            // after the first time reduce
            if self.loading_radius > 2 {
                self.loading_radius = 2;
            }
        }
    }

    /// Current chunk-loading radius along x, in chunks
    pub fn loading_radius(&self) -> i32 {
        self.loading_radius
    }
}

#[cfg(test)]
#[path = "paging_tests.rs"]
mod tests;
