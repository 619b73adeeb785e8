/*!
# Strata Iso Engine

Viewport camera core for a chunked 2.5D tile world.

The crate keeps a virtual camera over a streamed chunk grid: it builds the
orthographic-with-shear projection each frame, follows a focus entity with
leap damping, pages chunks in around the visible area, culls positions
against the view frustum and drives depth-sorted rendering through a
replaceable sort strategy.

## Architecture

- **Camera**: owns position, matrices, paging state and the active sorter
- **ChunkStore / RenderStorage / LightEngine / FocusRegistry**: consumed
  collaborator traits — the camera never owns world data
- **RenderBatch**: recording boundary toward the graphics backend
- **Sorter**: replaceable draw-ordering strategy (none / topological /
  depth value)

Collaborators are passed per frame through [`camera::GameWorld`] and
[`camera::RenderOutput`]; nothing global is shared except the logger.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod events;
pub mod map;
pub mod scene;
pub mod lighting;
pub mod render;
pub mod camera;
pub mod sorting;

// Main strata namespace module
pub mod strata {
    // Error types
    pub use crate::error::{StrataError, StrataResult};

    // Engine singleton (logger host)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Configuration sub-module
    pub mod config {
        pub use crate::config::*;
    }

    // Event bus sub-module
    pub mod events {
        pub use crate::events::*;
    }

    // Map sub-module (coordinates, chunks)
    pub mod map {
        pub use crate::map::*;
    }

    // Scene sub-module (renderables, focus targets)
    pub mod scene {
        pub use crate::scene::*;
    }

    // Lighting sub-module
    pub mod lighting {
        pub use crate::lighting::*;
    }

    // Render boundary sub-module
    pub mod render {
        pub use crate::render::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Sorting sub-module
    pub mod sorting {
        pub use crate::sorting::*;
    }
}

// Re-export math library at crate root
pub use glam;
