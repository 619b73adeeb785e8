//! Render boundary — batch recording and debug drawing traits.
//!
//! The camera configures and drives a sprite batch but never touches the
//! graphics API; backends implement RenderBatch (and optionally
//! DebugDraw) over their command recording.

mod batch;
mod debug_draw;

#[cfg(test)]
pub mod mock_batch;

pub use batch::{FrameShading, RenderBatch, ScreenRect, ShaderKey, UniformValue};
pub use debug_draw::DebugDraw;
