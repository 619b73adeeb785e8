//! Camera module — viewport camera over a chunked 2.5D world.
//!
//! The Camera owns its position, matrices, chunk-paging state and the
//! active draw-order strategy. World data stays outside: collaborators
//! are handed in per call through [`GameWorld`] and [`RenderOutput`].
//! Split-screen setups run several cameras against one shared world.

mod camera;
mod projection;
mod frustum;
mod paging;
mod debug;

pub use camera::{Camera, GameWorld, RenderOutput};
pub use projection::{FAR_PLANE, NEAR_PLANE};
