//! Gravboost — an orbital slingshot fleet puzzle.
//!
//! Launch a tethered fleet of ships past softened-gravity planets into the
//! goal ring.  The library exposes the simulation core (gravity field, fleet
//! forces, mission state machine) so the binary stays a thin shell and the
//! integration tests can drive headless apps.

pub mod aim;
pub mod config;
pub mod constants;
pub mod error;
pub mod fleet;
pub mod gravity;
pub mod level;
pub mod menu;
pub mod mission;
pub mod planet;
pub mod rendering;
pub mod simulation;
