/// Lighting engine boundary.
///
/// The camera uploads per-frame light uniforms sampled at its center;
/// the samples come from an external lighting engine.

use glam::Vec3;
use crate::map::Point;

/// One directional light sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Direction the light travels, unit length
    pub normal: Vec3,
    /// Linear RGB intensity
    pub color: Vec3,
}

impl LightSample {
    /// Create a sample
    pub fn new(normal: Vec3, color: Vec3) -> Self {
        Self { normal, color }
    }
}

/// Per-position light queries the camera consumes.
pub trait LightEngine: Send + Sync {
    /// Sun sample at `at`
    fn sun(&self, at: Point) -> LightSample;

    /// Moon sample at `at`; None while the moon is below the horizon
    fn moon(&self, at: Point) -> Option<LightSample>;

    /// Ambient color at `at`
    fn ambient(&self, at: Point) -> Vec3;
}
