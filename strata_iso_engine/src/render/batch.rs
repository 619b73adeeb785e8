/// Sprite batch recording boundary.
///
/// The camera sets the projection, shader, viewport and per-frame
/// uniforms, then the active sort strategy records sprites between
/// begin/end. The write index names the batch's current position in its
/// vertex data; rewinding it replays already-recorded vertices, which is
/// what single-batch multi-pass rendering relies on.

use glam::{Mat4, Vec2, Vec3};
use slotmap::new_key_type;

new_key_type! {
    /// Stable key for a shader program in an external registry.
    pub struct ShaderKey;
}

/// Rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    /// Create a rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// Value for a named shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Color([f32; 4]),
}

/// Per-frame shading settings forwarded to object drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameShading {
    /// Static auto-shade on cell faces
    pub auto_shade: bool,
    /// Ambient occlusion strength, 0 disables
    pub ambient_occlusion: f32,
}

/// Recording interface of the game-space sprite batch.
pub trait RenderBatch: Send + Sync {
    /// Set the combined projection-view matrix for subsequent sprites
    fn set_projection(&mut self, matrix: Mat4);

    /// Bind a shader program
    fn set_shader(&mut self, shader: ShaderKey);

    /// Set the output viewport in screen pixels, origin top left
    fn set_viewport(&mut self, rect: ScreenRect);

    /// Begin recording
    fn begin(&mut self);

    /// End recording and flush
    fn end(&mut self);

    /// Assign a named uniform on the bound shader
    fn set_uniform(&mut self, name: &str, value: UniformValue);

    /// Record one sprite quad at a view-space position
    fn draw_sprite(&mut self, position: Vec2, size: Vec2);

    /// Current write position in the batch's vertex data
    fn write_index(&self) -> u32;

    /// Rewind the write position to `index`, replaying the vertex data
    /// recorded up to it
    fn rewind(&mut self, index: u32);

    /// Back buffer resolution in physical pixels
    fn backbuffer_size(&self) -> (f32, f32);
}
