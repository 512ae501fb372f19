//! Runtime physics configuration loaded from `assets/physics.toml`.
//!
//! [`PhysicsConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_physics_config`] reads
//! `assets/physics.toml` and overwrites the defaults with any values present
//! in the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<PhysicsConfig>` to any system parameter list and read
//! values with `config.tether_hertz`, `config.separation_radius`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `PhysicsConfig::default()`.

use crate::constants::*;
use crate::error::{validate_separation_max_accel, validate_tether_hertz};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable physics and gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/physics.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // ── Simulation Step ──────────────────────────────────────────────────────
    pub max_step_seconds: f32,
    pub solver_substeps: usize,
    pub facing_speed_threshold: f32,

    // ── Fleet Geometry ───────────────────────────────────────────────────────
    pub ship_radius: f32,

    // ── Tether ───────────────────────────────────────────────────────────────
    pub tether_rest_length: f32,
    pub tether_hertz: f32,
    pub tether_damping_ratio: f32,

    // ── Separation ───────────────────────────────────────────────────────────
    pub separation_radius: f32,
    pub separation_strength: f32,
    pub separation_max_accel: f32,

    // ── Launch ───────────────────────────────────────────────────────────────
    pub min_drag_distance: f32,
    pub launch_speed_scale: f32,

    // ── Camera / HUD ─────────────────────────────────────────────────────────
    pub camera_meters_per_pixel: f32,
    pub hud_font_size: f32,
    pub banner_font_size: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            // Simulation Step
            max_step_seconds: MAX_STEP_SECONDS,
            solver_substeps: SOLVER_SUBSTEPS,
            facing_speed_threshold: FACING_SPEED_THRESHOLD,
            // Fleet Geometry
            ship_radius: SHIP_RADIUS,
            // Tether
            tether_rest_length: TETHER_REST_LENGTH,
            tether_hertz: TETHER_HERTZ,
            tether_damping_ratio: TETHER_DAMPING_RATIO,
            // Separation
            separation_radius: SEPARATION_RADIUS,
            separation_strength: SEPARATION_STRENGTH,
            separation_max_accel: SEPARATION_MAX_ACCEL,
            // Launch
            min_drag_distance: MIN_DRAG_DISTANCE,
            launch_speed_scale: LAUNCH_SPEED_SCALE,
            // Camera / HUD
            camera_meters_per_pixel: CAMERA_METERS_PER_PIXEL,
            hud_font_size: HUD_FONT_SIZE,
            banner_font_size: BANNER_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/physics.toml` and overwrite the
/// `PhysicsConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_physics_config(mut config: ResMut<PhysicsConfig>) {
    let path = "assets/physics.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<PhysicsConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded physics config from {path}");
                if let Err(e) = validate_tether_hertz(config.tether_hertz) {
                    eprintln!("⚠ {e}; reverting to default");
                    config.tether_hertz = TETHER_HERTZ;
                }
                if let Err(e) = validate_separation_max_accel(config.separation_max_accel) {
                    eprintln!("⚠ {e}; reverting to default");
                    config.separation_max_accel = SEPARATION_MAX_ACCEL;
                }
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
