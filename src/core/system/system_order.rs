//! Central system ordering labels to make the frame sequence explicit.
//! 1. Input (raw device state -> intent events)
//! 2. Impulse (velocity / tilt edits before the physics step)
//! 3. Rapier (handled by plugin)
//! 4. Rules (pass detection, bounds and collision verdicts)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct AssetLoadSet; // Startup: handles resolved before any spawner reads them

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ImpulseSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RulesSet;
