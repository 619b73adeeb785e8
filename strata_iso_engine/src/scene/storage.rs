/// Render storage boundary.
///
/// The storage owns the renderable objects (cells, entities, particles);
/// the camera and its sort strategies only pull snapshots out of it and
/// hand keys back for drawing.

use crate::camera::Camera;
use crate::error::StrataResult;
use crate::render::{FrameShading, RenderBatch};
use super::{ObjectKey, SceneObject};

/// Scene-side interface the sort strategies consume.
pub trait RenderStorage: Send + Sync {
    /// Append a snapshot of every object whose sprite may fall inside the
    /// camera's visible area.
    ///
    /// Implementations typically iterate the chunks between the camera's
    /// visible borders and filter with `Camera::in_view_frustum`; the
    /// result order is the storage's natural order (NoSort renders it
    /// unchanged).
    fn collect_visible(&self, camera: &Camera, out: &mut Vec<SceneObject>);

    /// Draw one object through the batch.
    ///
    /// # Errors
    ///
    /// `StrataError::InvalidResource` when the key no longer resolves
    /// (the object was removed between collection and drawing).
    fn draw_object(
        &self,
        key: ObjectKey,
        batch: &mut dyn RenderBatch,
        shading: &FrameShading,
    ) -> StrataResult<()>;
}
