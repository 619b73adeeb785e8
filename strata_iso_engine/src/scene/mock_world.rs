/// Mock world collaborators for unit tests.
///
/// MockRenderStorage owns a handful of positioned objects and records
/// every draw; MockFocusRegistry is a slotmap of movable entities;
/// MockLightEngine answers with fixed samples.

use std::sync::Mutex;

use glam::Vec2 as GVec2;
use glam::Vec3;
use slotmap::SlotMap;

use crate::camera::Camera;
use crate::error::StrataResult;
use crate::lighting::{LightEngine, LightSample};
use crate::map::{cell, Point};
use crate::render::{FrameShading, RenderBatch};
use crate::engine_err;
use super::{FocusKey, FocusRegistry, ObjectKey, RenderStorage, SceneObject};

// ============================================================================
// Mock RenderStorage
// ============================================================================

#[derive(Default)]
pub struct MockRenderStorage {
    objects: SlotMap<ObjectKey, Point>,
    /// Keys in draw order, across all render calls
    pub draw_log: Mutex<Vec<ObjectKey>>,
    /// When set, collect_visible filters through the camera frustum
    pub cull: bool,
}

impl MockRenderStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object at a game-space position
    pub fn add(&mut self, position: Point) -> ObjectKey {
        self.objects.insert(position)
    }

    /// Remove an object
    pub fn remove(&mut self, key: ObjectKey) {
        self.objects.remove(key);
    }

    /// Reposition an object
    pub fn move_object(&mut self, key: ObjectKey, position: Point) {
        if let Some(stored) = self.objects.get_mut(key) {
            *stored = position;
        }
    }

    /// Keys drawn so far
    pub fn drawn(&self) -> Vec<ObjectKey> {
        self.draw_log.lock().unwrap().clone()
    }

    /// Forget the recorded draws
    pub fn clear_log(&self) {
        self.draw_log.lock().unwrap().clear();
    }
}

impl RenderStorage for MockRenderStorage {
    fn collect_visible(&self, camera: &Camera, out: &mut Vec<SceneObject>) {
        for (key, position) in &self.objects {
            if !self.cull || camera.in_view_frustum(position) {
                out.push(SceneObject::new(key, *position));
            }
        }
    }

    fn draw_object(
        &self,
        key: ObjectKey,
        batch: &mut dyn RenderBatch,
        _shading: &FrameShading,
    ) -> StrataResult<()> {
        let position = self
            .objects
            .get(key)
            .ok_or_else(|| engine_err!("strata::MockRenderStorage", "unknown object {:?}", key))?;
        self.draw_log.lock().unwrap().push(key);
        batch.draw_sprite(
            GVec2::new(position.view_spc_x(), position.view_spc_y()),
            GVec2::new(cell::VIEW_WIDTH as f32, (cell::VIEW_HEIGHT + cell::VIEW_DEPTH) as f32),
        );
        Ok(())
    }
}

// ============================================================================
// Mock FocusRegistry
// ============================================================================

pub struct MockEntity {
    pub position: Option<Point>,
    pub height: f32,
    pub name: String,
}

#[derive(Default)]
pub struct MockFocusRegistry {
    entities: SlotMap<FocusKey, MockEntity>,
}

impl MockFocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spawned entity
    pub fn spawn(&mut self, name: &str, position: Point, height: f32) -> FocusKey {
        self.entities.insert(MockEntity {
            position: Some(position),
            height,
            name: name.to_string(),
        })
    }

    /// Register an entity without a position
    pub fn register_unspawned(&mut self, name: &str) -> FocusKey {
        self.entities.insert(MockEntity {
            position: None,
            height: 0.0,
            name: name.to_string(),
        })
    }

    /// Reposition an entity
    pub fn place(&mut self, key: FocusKey, position: Point) {
        if let Some(entity) = self.entities.get_mut(key) {
            entity.position = Some(position);
        }
    }
}

impl FocusRegistry for MockFocusRegistry {
    fn has_position(&self, key: FocusKey) -> bool {
        self.entities
            .get(key)
            .map(|entity| entity.position.is_some())
            .unwrap_or(false)
    }

    fn position(&self, key: FocusKey) -> Option<Point> {
        self.entities.get(key).and_then(|entity| entity.position)
    }

    fn height(&self, key: FocusKey) -> f32 {
        self.entities.get(key).map(|entity| entity.height).unwrap_or(0.0)
    }

    fn name(&self, key: FocusKey) -> String {
        self.entities
            .get(key)
            .map(|entity| entity.name.clone())
            .unwrap_or_else(|| "<unknown>".to_string())
    }

    fn translate(&mut self, key: FocusKey, dx: f32, dy: f32) {
        if let Some(entity) = self.entities.get_mut(key) {
            if let Some(position) = entity.position.as_mut() {
                position.add(dx, dy, 0.0);
            }
        }
    }
}

// ============================================================================
// Mock LightEngine
// ============================================================================

pub struct MockLightEngine {
    pub moon_present: bool,
}

impl MockLightEngine {
    pub fn new(moon_present: bool) -> Self {
        Self { moon_present }
    }
}

impl LightEngine for MockLightEngine {
    fn sun(&self, _at: Point) -> LightSample {
        LightSample::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 0.95, 0.9))
    }

    fn moon(&self, _at: Point) -> Option<LightSample> {
        self.moon_present
            .then(|| LightSample::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.2, 0.2, 0.4)))
    }

    fn ambient(&self, _at: Point) -> Vec3 {
        Vec3::new(0.1, 0.1, 0.15)
    }
}
