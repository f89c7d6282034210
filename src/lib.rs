//! This is a plugin for Bevy game engine to setup and handle the logic for calculating a single-target pathfinding FlowField over a weighted grid
//!

pub mod bundle;
pub mod error;
pub mod flowfields;
pub mod plugin;

pub mod prelude;
