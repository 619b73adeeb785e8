/// Chunk grid layout.
///
/// A chunk is the fixed-size rectangular map partition that gets streamed
/// in and out as a unit. The camera identifies chunks by their grid
/// coordinate and derives chunk extents in both coordinate spaces from
/// the cell metrics.

use super::cell;

/// Blocks per chunk along the x axis
pub const BLOCKS_X: i32 = 16;
/// Blocks per chunk along the y axis
pub const BLOCKS_Y: i32 = 16;
/// Blocks per chunk along the height axis
pub const BLOCKS_Z: i32 = 10;

/// Chunk width in view pixels
pub const VIEW_WIDTH: i32 = BLOCKS_X * cell::VIEW_WIDTH;
/// Chunk depth in view pixels (rows advance half a sprite depth)
pub const VIEW_DEPTH: i32 = BLOCKS_Y * cell::VIEW_DEPTH2;

/// Chunk width in game units
pub const GAME_WIDTH: f32 = BLOCKS_X as f32 * cell::GAME_EDGELENGTH;
/// Chunk ground depth in game units
pub const GAME_DEPTH: f32 = BLOCKS_Y as f32 * cell::GAME_ROWLENGTH;

/// Grid coordinate of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    /// Create a chunk coordinate
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
