/// Render-cell metrics.
///
/// A cell is the sprite footprint of one grid block on screen. The
/// numbers are the contract between art assets, shaders and the camera
/// math; everything else in the crate derives from them.
///
/// The factors tie screen to world: one game unit of ground depth drops
/// half a view pixel, one game unit of height rises 0.75 view pixels.

/// Sprite width in view pixels
pub const VIEW_WIDTH: i32 = 128;
/// Half sprite width
pub const VIEW_WIDTH2: i32 = VIEW_WIDTH / 2;

/// Screen depth covered by one grid row, in view pixels
pub const VIEW_DEPTH: i32 = 64;
/// Half row depth
pub const VIEW_DEPTH2: i32 = VIEW_DEPTH / 2;

/// Screen rise of one full-height block, in view pixels
pub const VIEW_HEIGHT: i32 = 96;
/// Half block rise
pub const VIEW_HEIGHT2: i32 = VIEW_HEIGHT / 2;

/// Game-space edge length of one block
pub const GAME_EDGELENGTH: f32 = 128.0;
/// Half block edge
pub const GAME_EDGELENGTH2: f32 = GAME_EDGELENGTH / 2.0;

/// Game-space ground depth of one grid row
pub const GAME_ROWLENGTH: f32 = GAME_EDGELENGTH2;

/// View-space pixels per game unit of ground depth
/// (= VIEW_DEPTH2 / GAME_ROWLENGTH)
pub const PROJECTION_FACTOR_Y: f32 = 0.5;

/// View-space pixels per game unit of height
/// (= VIEW_HEIGHT / GAME_EDGELENGTH)
pub const PROJECTION_FACTOR_Z: f32 = 0.75;
