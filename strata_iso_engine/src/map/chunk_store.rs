/// Chunk streaming boundary.
///
/// The camera pages chunks in around its center but never owns them:
/// it asks the store whether a chunk is resident and fires a load
/// request when it is not. Load requests are fire-and-forget; the store
/// may fulfill them synchronously or in the background.

use rustc_hash::FxHashSet;
use super::{ChunkCoord, Point};

/// Storage and streaming interface for map chunks.
///
/// Implementations must tolerate concurrent presence checks and load
/// requests from several cameras (split screen shares one store).
pub trait ChunkStore: Send + Sync {
    /// Whether the chunk at `coord` is resident
    fn has_chunk(&self, coord: ChunkCoord) -> bool;

    /// Request a load. Must be a no-op for already-resident chunks.
    fn load_chunk(&mut self, coord: ChunkCoord);

    /// Focus point of the map, used as the initial camera anchor
    fn center(&self) -> Point;
}

/// In-memory ChunkStore that marks requested chunks resident immediately.
///
/// Suitable for tools, headless simulation and tests; a streaming
/// implementation would queue the load instead.
pub struct MemoryChunkStore {
    resident: FxHashSet<ChunkCoord>,
    center: Point,
    load_requests: u32,
}

impl MemoryChunkStore {
    /// Create an empty store centered at the origin
    pub fn new() -> Self {
        Self::with_center(Point::default())
    }

    /// Create an empty store with an explicit map focus point
    pub fn with_center(center: Point) -> Self {
        Self {
            resident: FxHashSet::default(),
            center,
            load_requests: 0,
        }
    }

    /// Number of resident chunks
    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// Number of load requests that actually loaded a chunk
    pub fn load_count(&self) -> u32 {
        self.load_requests
    }

    /// Drop a chunk from residency. Returns false if it was not resident.
    pub fn unload_chunk(&mut self, coord: ChunkCoord) -> bool {
        self.resident.remove(&coord)
    }
}

impl Default for MemoryChunkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkStore for MemoryChunkStore {
    fn has_chunk(&self, coord: ChunkCoord) -> bool {
        self.resident.contains(&coord)
    }

    fn load_chunk(&mut self, coord: ChunkCoord) {
        if self.resident.insert(coord) {
            self.load_requests += 1;
        }
    }

    fn center(&self) -> Point {
        self.center
    }
}

#[cfg(test)]
#[path = "chunk_store_tests.rs"]
mod tests;
