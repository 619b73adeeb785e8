//! Scene module — renderable objects and focus targets.
//!
//! The camera never owns scene data. It reads object positions through
//! the RenderStorage trait and follows entities through the
//! FocusRegistry trait; both are implemented by the surrounding game.

mod object;
mod storage;
mod focus;

#[cfg(test)]
pub mod mock_world;

pub use object::{ObjectKey, SceneObject};
pub use storage::RenderStorage;
pub use focus::{FocusKey, FocusRegistry};
