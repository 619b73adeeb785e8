/// Virtual camera displaying the game world on a viewport.
///
/// A camera can be locked to an entity with `set_focus`; it then follows
/// the entity with leap damping. Every active update rebuilds the
/// projection, recalculates the chunk-paging center and reselects the
/// sort strategy when its configuration changed. Rendering drives the
/// sprite batch: uniforms, viewport, one sorted pass — or, in multi-pass
/// mode, replays of the previous pass without resorting.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::config::ConfigProvider;
use crate::error::{StrataError, StrataResult};
use crate::events::{EventBus, EventMask, ListenerKey};
use crate::lighting::LightEngine;
use crate::map::{cell, chunk, ChunkStore, Point};
use crate::render::{
    DebugDraw, FrameShading, RenderBatch, ScreenRect, ShaderKey, UniformValue,
};
use crate::scene::{FocusKey, FocusRegistry, RenderStorage, SceneObject};
use crate::sorting::{self, Sorter, SorterId};
use crate::{engine_error, engine_info};

/// Consumed world collaborators, rebound every call.
///
/// `storage` is None while no world is loaded; `focus` and `lights` are
/// None when the surrounding game has no entity registry or lighting
/// engine.
pub struct GameWorld<'a> {
    pub config: &'a dyn ConfigProvider,
    pub map: &'a mut dyn ChunkStore,
    pub storage: Option<&'a dyn RenderStorage>,
    pub lights: Option<&'a dyn LightEngine>,
    pub focus: Option<&'a mut dyn FocusRegistry>,
    pub events: &'a mut EventBus,
}

/// Render boundary for one `render` call.
pub struct RenderOutput<'a> {
    pub batch: &'a mut dyn RenderBatch,
    pub shader: Option<ShaderKey>,
    pub debug: Option<&'a mut dyn DebugDraw>,
}

/// Initial chunk-loading radius; shrinks permanently after the first
/// successful pass (see `check_needed_chunks`)
const INITIAL_LOADING_RADIUS: i32 = 10;

/// Virtual camera over the chunked world. See the module docs.
pub struct Camera {
    /// Position in view space, Y-up
    pub(crate) position: Vec2,
    /// Unit up vector
    up: Vec3,

    pub(crate) projection: Mat4,
    pub(crate) view: Mat4,
    /// projection * view with the engine shear applied; stale until the
    /// first update
    pub(crate) combined: Mat4,

    /// Output rectangle on screen, origin top left
    screen: ScreenRect,
    full_window: bool,

    /// 1 is default, higher is closer
    zoom: f32,
    /// Internal render resolution width
    width_view: i32,
    /// Game pixels visible horizontally after projection
    pub(crate) width_after_proj: i32,
    /// Game pixels visible vertically after projection
    pub(crate) height_after_proj: i32,

    focus: Option<FocusKey>,

    shake_amplitude: f32,
    shake_time: f32,

    pub(crate) center_chunk_x: i32,
    pub(crate) center_chunk_y: i32,
    pub(crate) last_center_x: i32,
    pub(crate) last_center_y: i32,
    pub(crate) loading_radius: i32,

    /// False skips both update and render for the frame
    active: bool,
    id: u32,

    pub(crate) sorter: Option<Box<dyn Sorter>>,
    sorter_listener: Option<ListenerKey>,

    pub(crate) depth_list: Vec<SceneObject>,
    multi_rendering: bool,
    multi_pass_last_idx: u32,
}

impl Camera {
    // ===== CONSTRUCTION =====

    fn init(world: &mut GameWorld<'_>, screen: ScreenRect, full_window: bool) -> Camera {
        let mut camera = Camera {
            position: Vec2::ZERO,
            up: Vec3::new(0.0, 1.0, 0.0),
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            combined: Mat4::IDENTITY,
            screen,
            full_window,
            zoom: 1.0,
            width_view: world.config.value_i("renderResolutionWidth"),
            width_after_proj: 0,
            height_after_proj: 0,
            focus: None,
            shake_amplitude: 0.0,
            shake_time: 0.0,
            center_chunk_x: 0,
            center_chunk_y: 0,
            last_center_x: 0,
            last_center_y: 0,
            loading_radius: INITIAL_LOADING_RADIUS,
            active: true,
            id: 0,
            sorter: None,
            sorter_listener: None,
            depth_list: Vec::new(),
            multi_rendering: false,
            multi_pass_last_idx: 0,
        };
        camera.set_zoom(1.0);
        camera.init_sorter(world.config, world.events);
        camera
    }

    /// Anchor the paging state to the current position and load the
    /// surrounding chunks when chunking is enabled
    fn init_focus(&mut self, map: &mut dyn ChunkStore, config: &dyn ConfigProvider) {
        self.center_chunk_x = (self.position.x / chunk::VIEW_WIDTH as f32).floor() as i32;
        self.center_chunk_y = (-self.position.y / chunk::VIEW_DEPTH as f32).floor() as i32;
        if config.value_b("mapUseChunks") {
            self.check_needed_chunks(map, config);
        }
    }

    /// Create a camera covering the whole window, pointing at the middle
    /// of the map.
    pub fn full_window(world: &mut GameWorld<'_>, width: i32, height: i32) -> Camera {
        let mut camera = Self::init(world, ScreenRect::new(0, 0, width, height), true);
        let center = world.map.center();
        camera.position = Vec2::new(center.view_spc_x(), center.view_spc_y());
        camera.init_focus(world.map, world.config);
        camera
    }

    /// Create a camera pointing at the middle of the map.
    ///
    /// `screen` is the output rectangle in the application window,
    /// origin top left.
    pub fn new(world: &mut GameWorld<'_>, screen: ScreenRect) -> Camera {
        let mut camera = Self::init(world, screen, false);
        let center = world.map.center();
        camera.position = Vec2::new(center.view_spc_x(), center.view_spc_y());
        camera.init_focus(world.map, world.config);
        camera
    }

    /// Create a camera focusing a specific game-space point.
    pub fn with_center(world: &mut GameWorld<'_>, screen: ScreenRect, center: Point) -> Camera {
        let mut camera = Self::init(world, screen, false);
        camera.position = Vec2::new(center.view_spc_x(), center.view_spc_y());
        camera.init_focus(world.map, world.config);
        camera
    }

    /// Create a camera locked to an entity.
    ///
    /// # Errors
    ///
    /// `StrataError::InitializationFailed` when no focus registry is
    /// available or the entity has no position yet — a camera without a
    /// valid anchor cannot compute its initial position.
    pub fn with_focus(
        world: &mut GameWorld<'_>,
        screen: ScreenRect,
        focus: FocusKey,
    ) -> StrataResult<Camera> {
        let (anchor, half_rise) = match world.focus.as_deref() {
            None => {
                engine_error!("strata::Camera", "cannot focus an entity without a registry");
                return Err(StrataError::InitializationFailed(
                    "no focus registry available".to_string(),
                ));
            }
            Some(registry) => match registry.position(focus) {
                None => {
                    let name = registry.name(focus);
                    engine_error!("strata::Camera", "{} is not spawned yet", name);
                    return Err(StrataError::InitializationFailed(format!(
                        "{} is not spawned yet",
                        name
                    )));
                }
                Some(position) => {
                    engine_info!(
                        "strata::Camera",
                        "creating camera focusing entity {}",
                        registry.name(focus)
                    );
                    (
                        position,
                        registry.height(focus) * cell::PROJECTION_FACTOR_Z / 2.0,
                    )
                }
            },
        };

        let mut camera = Self::init(world, screen, false);
        camera.focus = Some(focus);
        // half the height offset keeps the middle of the entity centered
        camera.position = Vec2::new(anchor.view_spc_x(), anchor.view_spc_y() + half_rise);
        camera.init_focus(world.map, world.config);
        Ok(camera)
    }

    // ===== PER-FRAME UPDATE =====

    /// Update the camera.
    ///
    /// Runs focus-follow, screen shake, the matrix rebuild, the paging
    /// center recalculation and the sorter reselection — or nothing at
    /// all while the camera is disabled.
    pub fn update(&mut self, dt: f32, world: &mut GameWorld<'_>) {
        if !self.active {
            return;
        }

        if let (Some(key), Some(registry)) = (self.focus, world.focus.as_deref()) {
            if let Some(position) = registry.position(key) {
                let desired = Vec2::new(
                    position.view_spc_x(),
                    position.view_spc_y()
                        + registry.height(key) * cell::PROJECTION_FACTOR_Z / 2.0,
                );

                // only follow once outside the leap radius, then stay on
                // the separating line exactly one radius behind
                let leap_radius = world.config.value_i("cameraLeapRadius") as f32;
                if self.position.distance(desired) > leap_radius {
                    self.position =
                        desired + (self.position - desired).normalize() * leap_radius;
                }
            }
        }

        if self.shake_time > 0.0 {
            self.shake_time -= dt;
            self.position.x += self.shake_offset(dt);
            self.position.y += self.shake_offset(dt);
        }

        self.rebuild_matrices();

        // recalculate the paging center and pick up sorter config changes
        self.update_center(world.map, world.config);
        self.init_sorter(world.config, world.events);
    }

    /// Zero-centered jitter bounded by the shake amplitude
    fn shake_offset(&self, dt: f32) -> f32 {
        (rand::random::<f32>() * self.shake_amplitude * dt) % self.shake_amplitude
            - self.shake_amplitude * 0.5
    }

    // ===== SORT STRATEGY DISPATCH =====

    /// Swap the sort strategy when the configured id differs from the
    /// active one. The old strategy is unsubscribed from change
    /// notifications before the new one subscribes; a repeated identical
    /// id changes nothing.
    pub(crate) fn init_sorter(&mut self, config: &dyn ConfigProvider, events: &mut EventBus) {
        let desired = SorterId::from_config(config.value_i("depthSorter"));
        if self.sorter.as_ref().map(|sorter| sorter.id()) != Some(desired) {
            if let Some(listener) = self.sorter_listener.take() {
                events.unsubscribe(listener);
            }
            let sorter = sorting::create_sorter(desired);
            self.sorter_listener = Some(events.subscribe(
                EventMask::MAP_CHANGED | EventMask::RENDER_STORAGE_CHANGED,
                sorter.dirty_flag(),
            ));
            self.sorter = Some(sorter);
        }
    }

    /// Unsubscribe the sort strategy from change notifications.
    ///
    /// Must be called before dropping a camera that shares its EventBus
    /// with others, or the bus keeps raising a flag nobody reads.
    pub fn dispose(&mut self, events: &mut EventBus) {
        if let Some(listener) = self.sorter_listener.take() {
            events.unsubscribe(listener);
        }
        self.sorter = None;
    }

    // ===== RENDERING =====

    /// Render the viewport.
    ///
    /// No-op while the camera is disabled or no world is loaded. A
    /// missing shader is non-fatal: it is reported and the camera
    /// disables itself until explicitly re-enabled.
    pub fn render(
        &mut self,
        world: &mut GameWorld<'_>,
        output: &mut RenderOutput<'_>,
    ) -> StrataResult<()> {
        if !self.active {
            return Ok(());
        }
        let Some(storage) = world.storage else {
            return Ok(());
        };
        let Some(shader) = output.shader else {
            engine_error!(
                "strata::Camera",
                "no shader bound, camera {} deactivated",
                self.id
            );
            self.active = false;
            return Ok(());
        };

        let batch = &mut *output.batch;
        batch.set_projection(self.combined);
        batch.set_shader(shader);

        // the viewport runs y-down on screen while the camera is y-up
        let (backbuffer_w, backbuffer_h) = batch.backbuffer_size();
        batch.set_viewport(ScreenRect::new(
            self.screen.x,
            backbuffer_h as i32 - self.screen.height - self.screen.y,
            self.screen.width,
            self.screen.height,
        ));

        let shading = FrameShading {
            auto_shade: world.config.value_b("enableAutoShade"),
            ambient_occlusion: world.config.value_f("ambientOcclusion"),
        };

        batch.begin();
        self.upload_frame_uniforms(world, batch, backbuffer_w, backbuffer_h);

        let single_batch = world.config.value_b("singleBatchRendering");
        if !self.multi_rendering || (single_batch && self.multi_pass_last_idx == 0) {
            // regular frame, or first pass: sort and render
            let mut sorter = self.sorter.take();
            let result = match sorter.as_mut() {
                Some(sorter) => sorter.render_sorted(self, storage, batch, &shading),
                None => Ok(()),
            };
            self.sorter = sorter;
            result?;
            self.multi_pass_last_idx = batch.write_index();
        } else if single_batch {
            // later pass: replay the recorded vertex data
            batch.rewind(self.multi_pass_last_idx);
        } else {
            // later pass without batch replay: render the cached list
            if self.multi_pass_last_idx == 0 {
                let mut sorter = self.sorter.take();
                let mut list = std::mem::take(&mut self.depth_list);
                if let Some(sorter) = sorter.as_mut() {
                    sorter.create_depth_list(self, storage, &mut list);
                }
                self.depth_list = list;
                self.sorter = sorter;
            }
            for object in &self.depth_list {
                storage.draw_object(object.key, batch, &shading)?;
            }
            self.multi_pass_last_idx = batch.write_index();
        }

        batch.end();

        if world.config.value_b("devDebugRendering") {
            if let Some(debug) = output.debug.as_deref_mut() {
                self.draw_debug(storage, debug);
            }
        }

        Ok(())
    }

    fn upload_frame_uniforms(
        &self,
        world: &GameWorld<'_>,
        batch: &mut dyn RenderBatch,
        backbuffer_w: f32,
        backbuffer_h: f32,
    ) {
        let center = self.center();
        batch.set_uniform(
            "u_cameraPos",
            UniformValue::Vec3(Vec3::new(center.x, center.y, center.z)),
        );
        batch.set_uniform(
            "u_fogColor",
            UniformValue::Vec3(Vec3::new(
                world.config.value_f("fogR"),
                world.config.value_f("fogG"),
                world.config.value_f("fogB"),
            )),
        );
        batch.set_uniform(
            "u_resBuffer",
            UniformValue::Vec2(Vec2::new(backbuffer_w, backbuffer_h)),
        );

        if let (Some(key), Some(registry)) = (self.focus, world.focus.as_deref()) {
            if let Some(position) = registry.position(key) {
                let point = Vec3::new(position.x, position.y, position.z);
                batch.set_uniform("u_playerpos", UniformValue::Vec3(point));
                batch.set_uniform("u_localLightPos", UniformValue::Vec3(point));
            }
        }

        if world.config.value_b("enableLightEngine") {
            if let Some(lights) = world.lights {
                let sun = lights.sun(center);
                batch.set_uniform("u_sunNormal", UniformValue::Vec3(sun.normal));
                batch.set_uniform("u_sunColor", UniformValue::Vec3(sun.color));
                match lights.moon(center) {
                    None => {
                        batch.set_uniform("u_moonNormal", UniformValue::Vec3(Vec3::ZERO));
                        batch.set_uniform("u_moonColor", UniformValue::Vec3(Vec3::ZERO));
                        batch.set_uniform("u_ambientColor", UniformValue::Vec3(Vec3::ZERO));
                    }
                    Some(moon) => {
                        batch.set_uniform("u_moonNormal", UniformValue::Vec3(moon.normal));
                        batch.set_uniform("u_moonColor", UniformValue::Vec3(moon.color));
                        batch.set_uniform(
                            "u_ambientColor",
                            UniformValue::Vec3(lights.ambient(center)),
                        );
                    }
                }
            }
        }
    }

    /// Allow rendering multiple passes of one logical frame without
    /// resorting.
    pub fn start_multi_rendering(&mut self) {
        self.multi_rendering = true;
        self.multi_pass_last_idx = 0;
    }

    /// Stop multi-pass rendering; each new `render` sorts again.
    pub fn end_multi_rendering(&mut self) {
        self.multi_rendering = false;
    }

    /// Whether multi-pass mode is active
    pub fn is_multi_rendering(&self) -> bool {
        self.multi_rendering
    }

    // ===== POSITION & FOCUS =====

    /// The focus point in game space.
    ///
    /// Approximated: the position is stored in view space and the back
    /// transformation is a line, so a fixed height is assumed.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x,
            -(self.position.y - (cell::VIEW_HEIGHT2 * chunk::BLOCKS_Z) as f32)
                / cell::PROJECTION_FACTOR_Y,
            cell::GAME_EDGELENGTH2 * chunk::BLOCKS_Z as f32,
        )
    }

    /// Point the camera at a game-space position. Removes an entity lock
    /// if one is set.
    pub fn set_center(&mut self, point: Point) {
        self.focus = None;
        self.position = Vec2::new(point.view_spc_x(), point.view_spc_y());
    }

    /// Lock the camera to an entity and follow it. Replaces any previous
    /// focus target.
    pub fn set_focus(&mut self, focus: FocusKey, registry: &dyn FocusRegistry) {
        if self.focus != Some(focus) {
            self.focus = Some(focus);
            if let Some(position) = registry.position(focus) {
                self.position = Vec2::new(
                    position.view_spc_x(),
                    position.view_spc_y()
                        + registry.height(focus) * cell::PROJECTION_FACTOR_Z / 2.0,
                );
            }
        }
    }

    /// Currently followed entity, if any
    pub fn focus(&self) -> Option<FocusKey> {
        self.focus
    }

    /// Move the camera (or its focused entity) in game space.
    pub fn move_by(&mut self, world: &mut GameWorld<'_>, dx: f32, dy: f32) {
        let mut moved_entity = false;
        if let (Some(key), Some(registry)) = (self.focus, world.focus.as_deref_mut()) {
            if registry.has_position(key) {
                registry.translate(key, dx, dy);
                moved_entity = true;
            }
        }
        if !moved_entity {
            self.position.x += dx;
            self.position.y -= dy * cell::PROJECTION_FACTOR_Y;
        }
        self.update_center(world.map, world.config);
    }

    /// Shake the screen
    ///
    /// `time` is game time remaining for the effect.
    pub fn shake(&mut self, amplitude: f32, time: f32) {
        self.shake_amplitude = amplitude;
        self.shake_time = time;
    }

    /// Camera position in view space, Y-up
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    // ===== ZOOM & VIEWPORT =====

    /// Set the zoom factor. 1 is default, higher is closer.
    ///
    /// The visible width/height after projection are re-derived here and
    /// nowhere else.
    pub fn set_zoom(&mut self, zoom: f32) {
        assert!(zoom > 0.0, "zoom must be positive, got {}", zoom);
        self.zoom = zoom;
        self.width_after_proj = (self.width_view as f32 / zoom) as i32;
        self.height_after_proj =
            (self.screen.height as f32 / (self.proj_scaling() * zoom)) as i32;
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Scaling factor between render resolution and screen resolution.
    ///
    /// A camera displayed twice as large as its render resolution has
    /// factor 2.
    pub fn proj_scaling(&self) -> f32 {
        self.screen.width as f32 / self.width_view as f32
    }

    /// Game pixels visible in x direction after zoom
    pub fn world_width_viewport(&self) -> i32 {
        self.width_after_proj
    }

    /// Game pixels visible in y direction after zoom
    pub fn world_height_viewport(&self) -> i32 {
        self.height_after_proj
    }

    /// Width of the internal render resolution
    pub fn set_internal_render_resolution(&mut self, resolution: i32) {
        self.width_view = resolution;
        self.set_zoom(self.zoom);
    }

    /// Output rectangle on screen, origin top left
    pub fn screen_rect(&self) -> ScreenRect {
        self.screen
    }

    /// Whether the output covers the whole window
    pub fn is_full_window(&self) -> bool {
        self.full_window
    }

    /// Should be called when the window resized. Only full-window
    /// cameras follow the new size.
    pub fn resize(&mut self, width: i32, height: i32) {
        if self.full_window {
            self.screen = ScreenRect::new(0, 0, width, height);
            self.set_zoom(self.zoom);
        }
    }

    /// Update the output size on screen
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        self.screen.width = width;
        self.screen.height = height;
        self.set_zoom(self.zoom);
    }

    // ===== STATE =====

    /// Enable or disable the camera. Re-enabling re-checks the needed
    /// chunks when chunking is on.
    pub fn set_active(&mut self, active: bool, world: &mut GameWorld<'_>) {
        if !self.active && active && world.config.value_b("mapUseChunks") {
            self.check_needed_chunks(world.map, world.config);
        }
        self.active = active;
    }

    /// Whether the camera currently updates and renders
    pub fn is_enabled(&self) -> bool {
        self.active
    }

    /// Numeric identifier for diagnostics
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// X index of the chunk the camera is centered on
    pub fn center_chunk_x(&self) -> i32 {
        self.center_chunk_x
    }

    /// Y index of the chunk the camera is centered on
    pub fn center_chunk_y(&self) -> i32 {
        self.center_chunk_y
    }

    /// Combined projection-view matrix of the last update
    pub fn combined(&self) -> Mat4 {
        self.combined
    }

    /// Project a game-space point to screen pixels, origin top left.
    pub fn project_to_screen(&self, point: &Point) -> Vec2 {
        let clip = self.combined
            * Vec4::new(point.view_spc_x(), point.view_spc_y(), 0.0, 1.0);
        // orthographic: w stays 1, no perspective divide needed
        Vec2::new(
            self.screen.x as f32 + (clip.x + 1.0) * 0.5 * self.screen.width as f32,
            self.screen.y as f32 + (1.0 - (clip.y + 1.0) * 0.5) * self.screen.height as f32,
        )
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
