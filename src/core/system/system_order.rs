//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (aim tracking and drop handling before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (collision-event consumers after the physics step)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // pointer input applied before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // merge / loss reaction after the physics step
