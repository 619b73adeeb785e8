/// Shape drawing boundary for the debug overlay.
///
/// Only the camera's debug rendering uses this; backends without a shape
/// renderer simply pass no DebugDraw in the RenderOutput.

use glam::{Mat4, Vec2};

/// Immediate-mode line/rect recording.
pub trait DebugDraw: Send + Sync {
    /// Set the projection matrix for subsequent shapes
    fn set_projection(&mut self, matrix: Mat4);

    /// Set the current draw color (RGBA, linear)
    fn set_color(&mut self, color: [f32; 4]);

    /// Record a line segment
    fn line(&mut self, from: Vec2, to: Vec2);

    /// Record a rectangle outline
    fn rect(&mut self, origin: Vec2, size: Vec2);
}
