/// Visible-area borders and the view frustum test.
///
/// Grid-unit borders quantize with truncation (not floor) and add a
/// safety margin of one cell; the VS variants return raw view-space
/// floats. `in_view_frustum` culls a position by its projected sprite
/// footprint: a vertical overlap test plus a squared horizontal distance
/// test, both against the camera's extent around its center.

use crate::map::{cell, chunk, Point};
use super::Camera;

impl Camera {
    /// Left border of the visible area in view space
    pub fn visible_left_border_vs(&self) -> f32 {
        (self.position.x - self.width_after_proj as f32 * 0.5) - cell::VIEW_WIDTH2 as f32
    }

    /// Left border of the visible area in grid coordinates, one cell of
    /// margin included
    pub fn visible_left_border(&self) -> i32 {
        ((self.position.x - self.width_after_proj as f32 * 0.5) / cell::VIEW_WIDTH as f32
            - 1.0) as i32
    }

    /// Right border of the visible area in grid coordinates, one cell of
    /// margin included
    pub fn visible_right_border(&self) -> i32 {
        ((self.position.x + self.width_after_proj as f32 * 0.5) / cell::VIEW_WIDTH as f32
            + 1.0) as i32
    }

    /// Right border of the visible area in view space
    pub fn visible_right_border_vs(&self) -> f32 {
        self.position.x + self.width_after_proj as f32 * 0.5 + cell::VIEW_WIDTH2 as f32
    }

    /// Back (top) border of the visible ground area in grid coordinates
    pub fn visible_back_border(&self) -> i32 {
        ((self.position.y + self.height_after_proj as f32 * 0.5)
            / -(cell::VIEW_DEPTH2 as f32)) as i32
    }

    /// Front (bottom) border at ground level in grid coordinates
    pub fn visible_front_border_low(&self) -> i32 {
        ((self.position.y - self.height_after_proj as f32 * 0.5)
            / -(cell::VIEW_DEPTH2 as f32)) as i32
    }

    /// Front (bottom) border including the tallest possible stack: the
    /// low border pushed by the world height expressed as a y distance
    pub fn visible_front_border_high(&self) -> i32 {
        ((self.position.y - self.height_after_proj as f32 * 0.5)
            / -(cell::VIEW_DEPTH2 as f32)
            + (chunk::BLOCKS_Z * cell::VIEW_HEIGHT / cell::VIEW_DEPTH2) as f32) as i32
    }

    /// Whether the projected sprite footprint of `position` intersects
    /// the viewport.
    pub fn in_view_frustum(&self, position: &Point) -> bool {
        let vsp_y = position.view_spc_y();
        let half_height = (self.height_after_proj / 2) as f32;
        let vertical_overlap = (self.position.y + half_height)
            > (vsp_y - (cell::VIEW_HEIGHT * 2) as f32)
            && (vsp_y + (cell::VIEW_HEIGHT + cell::VIEW_DEPTH) as f32)
                > (self.position.y - half_height);
        if !vertical_overlap {
            return false;
        }

        // left and right check in one clause by squaring the distance;
        // i64 keeps the squares from overflowing for far-away positions
        let dist = (position.view_spc_x() - self.position.x) as i64;
        let reach = (self.width_after_proj / 2 + cell::VIEW_WIDTH2) as i64;
        dist * dist < reach * reach
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
