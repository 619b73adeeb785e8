/// Mock render boundary for unit tests (no GPU required).
///
/// MockRenderBatch records every call so tests can assert the exact
/// command stream the camera produced; MockDebugDraw does the same for
/// the debug overlay.

use glam::{Mat4, Vec2};
use slotmap::SlotMap;
use super::{DebugDraw, RenderBatch, ScreenRect, ShaderKey, UniformValue};

/// Mint a ShaderKey for tests that only need some bound shader
pub fn test_shader_key() -> ShaderKey {
    let mut shaders: SlotMap<ShaderKey, ()> = SlotMap::with_key();
    shaders.insert(())
}

/// Floats one recorded sprite quad advances the write index by
/// (4 vertices x 5 floats)
pub const QUAD_FLOATS: u32 = 20;

// ============================================================================
// Mock RenderBatch
// ============================================================================

#[derive(Debug, Default)]
pub struct MockRenderBatch {
    pub projection: Option<Mat4>,
    pub shader: Option<ShaderKey>,
    pub viewport: Option<ScreenRect>,
    pub uniforms: Vec<(String, UniformValue)>,
    pub sprites: Vec<Vec2>,
    pub begin_count: u32,
    pub end_count: u32,
    pub rewinds: Vec<u32>,
    pub backbuffer: (f32, f32),
    write_index: u32,
}

impl MockRenderBatch {
    pub fn new() -> Self {
        Self {
            backbuffer: (1920.0, 1080.0),
            ..Default::default()
        }
    }

    /// Value of a recorded uniform, latest assignment wins
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

impl RenderBatch for MockRenderBatch {
    fn set_projection(&mut self, matrix: Mat4) {
        self.projection = Some(matrix);
    }

    fn set_shader(&mut self, shader: ShaderKey) {
        self.shader = Some(shader);
    }

    fn set_viewport(&mut self, rect: ScreenRect) {
        self.viewport = Some(rect);
    }

    fn begin(&mut self) {
        self.begin_count += 1;
    }

    fn end(&mut self) {
        self.end_count += 1;
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.uniforms.push((name.to_string(), value));
    }

    fn draw_sprite(&mut self, position: Vec2, _size: Vec2) {
        self.sprites.push(position);
        self.write_index += QUAD_FLOATS;
    }

    fn write_index(&self) -> u32 {
        self.write_index
    }

    fn rewind(&mut self, index: u32) {
        self.rewinds.push(index);
        self.write_index = index;
    }

    fn backbuffer_size(&self) -> (f32, f32) {
        self.backbuffer
    }
}

// ============================================================================
// Mock DebugDraw
// ============================================================================

#[derive(Debug, Default)]
pub struct MockDebugDraw {
    pub projections: Vec<Mat4>,
    pub colors: Vec<[f32; 4]>,
    pub lines: Vec<(Vec2, Vec2)>,
    pub rects: Vec<(Vec2, Vec2)>,
}

impl MockDebugDraw {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DebugDraw for MockDebugDraw {
    fn set_projection(&mut self, matrix: Mat4) {
        self.projections.push(matrix);
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.colors.push(color);
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.lines.push((from, to));
    }

    fn rect(&mut self, origin: Vec2, size: Vec2) {
        self.rects.push((origin, size));
    }
}
