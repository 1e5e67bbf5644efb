/// Scene: model poses and the scene-wide direction light.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. The player keeps
/// a `ModelKey` into this map and writes the pose on every control call.

use slotmap::SlotMap;
use crate::error::Result;
use crate::engine_err;
use crate::light::DirectionLight;
use super::model_pose::{ModelKey, ModelPose};

/// Models and global lighting of a running demo.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Model poses stored in a slot map for O(1) insert/remove
    models: SlotMap<ModelKey, ModelPose>,
    /// Light lighting the whole scene from a fixed direction
    direction_light: DirectionLight,
}

impl Scene {
    /// Create an empty scene lit by `direction_light`
    pub fn new(direction_light: DirectionLight) -> Self {
        Self {
            models: SlotMap::with_key(),
            direction_light,
        }
    }

    /// Add a model and return its stable key.
    pub fn add_model(&mut self, pose: ModelPose) -> ModelKey {
        self.models.insert(pose)
    }

    /// Remove a model. Returns its last pose, or None if the key is stale.
    pub fn remove_model(&mut self, key: ModelKey) -> Option<ModelPose> {
        self.models.remove(key)
    }

    /// Get a model pose by key
    pub fn model(&self, key: ModelKey) -> Result<&ModelPose> {
        self.models.get(key).ok_or_else(|| {
            engine_err!("abyss3d::Scene", InvalidModel, "model key {:?} is not in the scene", key)
        })
    }

    /// Get a mutable model pose by key
    pub fn model_mut(&mut self, key: ModelKey) -> Result<&mut ModelPose> {
        self.models.get_mut(key).ok_or_else(|| {
            engine_err!("abyss3d::Scene", InvalidModel, "model key {:?} is not in the scene", key)
        })
    }

    pub fn contains_model(&self, key: ModelKey) -> bool {
        self.models.contains_key(key)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Iterate over all models.
    pub fn models(&self) -> impl Iterator<Item = (ModelKey, &ModelPose)> + '_ {
        self.models.iter()
    }

    pub fn direction_light(&self) -> &DirectionLight {
        &self.direction_light
    }

    pub fn direction_light_mut(&mut self) -> &mut DirectionLight {
        &mut self.direction_light
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
