/// Projection and view matrix construction.
///
/// The camera renders an orthographic base and fakes the 2.5D
/// perspective by editing individual matrix cells afterwards: the scaled
/// x term is copied into the shear slot, the y scale is halved and
/// negated, and the z translation term is negated to reverse depth
/// ordering. Shaders consume exactly this layout — which cells are
/// touched and by what multiplier is part of the contract.

use glam::{Mat4, Vec2, Vec3};
use crate::map::cell;
use super::Camera;

/// Near clipping plane distance
pub const NEAR_PLANE: f32 = 1.0;
/// Far clipping plane distance
pub const FAR_PLANE: f32 = 2200.0;

/// Orthographic projection sized to the visible world area.
///
/// Left/right and bottom/top are deliberately swapped; together with the
/// (0,-1,0) look-at up vector this matches the engine's screen
/// convention.
pub(crate) fn ortho_projection(width_after_proj: i32, height_after_proj: i32) -> Mat4 {
    let half_w = width_after_proj as f32 / 2.0;
    let half_h = height_after_proj as f32 / 2.0;
    Mat4::orthographic_rh_gl(half_w, -half_w, half_h, -half_h, NEAR_PLANE, FAR_PLANE)
}

/// View matrix: eye at z=+1 looking toward z=-1, y flipped.
pub(crate) fn view_matrix(position: Vec2) -> Mat4 {
    Mat4::look_at_rh(
        Vec3::new(position.x, position.y, 1.0),
        Vec3::new(position.x, position.y, -1.0),
        Vec3::new(0.0, -1.0, 0.0),
    )
}

/// Apply the engine shear to a combined matrix.
///
/// In row/column terms: M12 = M11 * PROJECTION_FACTOR_Z, M11 *= -0.5,
/// M23 *= -1 (glam column-major: `z_axis.y`, `y_axis.y`, `w_axis.z`).
pub(crate) fn apply_iso_shear(mut combined: Mat4) -> Mat4 {
    // there is some scaling in M11, keep it
    combined.z_axis.y = combined.y_axis.y * cell::PROJECTION_FACTOR_Z;
    combined.y_axis.y *= -0.5;
    // reverse z for a better fit with the near and far planes
    combined.w_axis.z *= -1.0;
    combined
}

impl Camera {
    /// Rebuild projection, view and combined matrices from the current
    /// position, zoom and viewport. Runs once per active update tick.
    pub(crate) fn rebuild_matrices(&mut self) {
        self.projection = ortho_projection(self.width_after_proj, self.height_after_proj);
        self.view = view_matrix(self.position);
        self.combined = apply_iso_shear(self.projection * self.view);
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
