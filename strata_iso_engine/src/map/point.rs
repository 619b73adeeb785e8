/// Game-space point and its view-space projection.
///
/// Game space is the world coordinate system gameplay logic uses: x east,
/// y south (toward the viewer), z up. View space is the camera-relative
/// 2D system, Y-up: x passes through unchanged, ground depth is
/// foreshortened by PROJECTION_FACTOR_Y and height rises the point by
/// PROJECTION_FACTOR_Z. The projection collapses y and z onto one screen
/// axis, so it has no exact inverse; see `Camera::center` for the
/// documented approximation used to recover a focus point.

use super::{cell, chunk, ChunkCoord};

/// A position in game space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    /// Create a point from game-space coordinates
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// View-space x (identical to game-space x)
    pub fn view_spc_x(&self) -> f32 {
        self.x
    }

    /// View-space y, Y-up: depth drops the point, height raises it
    pub fn view_spc_y(&self) -> f32 {
        -self.y * cell::PROJECTION_FACTOR_Y + self.z * cell::PROJECTION_FACTOR_Z
    }

    /// X index of the chunk containing this point
    pub fn chunk_x(&self) -> i32 {
        (self.x / chunk::GAME_WIDTH).floor() as i32
    }

    /// Y index of the chunk containing this point
    pub fn chunk_y(&self) -> i32 {
        (self.y / chunk::GAME_DEPTH).floor() as i32
    }

    /// Chunk grid coordinate containing this point
    pub fn chunk(&self) -> ChunkCoord {
        ChunkCoord {
            x: self.chunk_x(),
            y: self.chunk_y(),
        }
    }

    /// Translate in game space
    pub fn add(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self.z += dz;
        self
    }

    /// Straight-line distance to another point, game space
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
