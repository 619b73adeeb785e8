/// Debug overlay: chunk outline and draw-order visualization.
///
/// Draws the 3x3 chunk neighborhood around the origin in game space and
/// the active sorter's depth list as a polyline in screen space, colored
/// from cyan toward red along the draw order.

use glam::{Mat4, Vec2};
use crate::render::DebugDraw;
use crate::scene::RenderStorage;
use super::Camera;

impl Camera {
    /// Render the debug overlay through a shape drawer.
    pub(crate) fn draw_debug(&mut self, storage: &dyn RenderStorage, debug: &mut dyn DebugDraw) {
        // outline 3x3 chunks
        let chunk_w = crate::map::chunk::VIEW_WIDTH as f32;
        let chunk_d = crate::map::chunk::VIEW_DEPTH as f32;

        debug.set_projection(self.combined);
        debug.set_color([1.0, 0.0, 0.0, 1.0]);
        debug.rect(
            Vec2::new(-chunk_w, -chunk_d),
            Vec2::new(chunk_w * 3.0, chunk_d * 3.0 / 2.0),
        );
        debug.line(
            Vec2::new(-chunk_w, -chunk_d / 2.0),
            Vec2::new(chunk_w * 2.0, -chunk_d / 2.0),
        );
        debug.line(Vec2::new(-chunk_w, 0.0), Vec2::new(chunk_w * 2.0, 0.0));
        debug.line(
            Vec2::new(0.0, chunk_d / 2.0),
            Vec2::new(0.0, -chunk_d),
        );
        debug.line(
            Vec2::new(chunk_w, chunk_d / 2.0),
            Vec2::new(chunk_w, -chunk_d),
        );

        // draw order polyline, screen space
        let mut sorter = self.sorter.take();
        let mut list = std::mem::take(&mut self.depth_list);
        if let Some(sorter) = sorter.as_mut() {
            sorter.create_depth_list(self, storage, &mut list);
        }

        debug.set_projection(Mat4::IDENTITY);
        let mut line_color = [0.0_f32, 1.0, 1.0, 1.0];
        let step = if list.is_empty() {
            0.0
        } else {
            1.0 / list.len() as f32
        };
        let mut last: Option<Vec2> = None;
        for object in &list {
            let projected = self.project_to_screen(&object.position);
            if let Some(previous) = last {
                line_color[0] = (line_color[0] + step).min(1.0);
                line_color[1] = (line_color[1] - step).max(0.0);
                debug.set_color(line_color);
                debug.line(previous, projected);
            }
            last = Some(projected);
        }

        self.depth_list = list;
        self.sorter = sorter;
    }
}
