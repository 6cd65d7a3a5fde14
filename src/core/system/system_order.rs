//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (paddle steering / bullet spawning before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (contact rule resolution after the step)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input applied before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // contact rules after physics
