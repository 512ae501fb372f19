//! Simulation orchestration: Rapier setup and per-frame system ordering.
//!
//! Frame order while Playing:
//!
//! 1. `Update` — clear forces, then gravity, tether, separation accumulate
//!    into each ship's `ExternalForce`.
//! 2. Rapier steps the world (variable timestep, clamped, fixed substeps).
//! 3. `PostUpdate` after writeback — facing sync, then lethal contacts, then
//!    goal sensor events.  Contacts run first so a frame that fails the
//!    mission drops its remaining arrival events.

use crate::config::{load_physics_config, PhysicsConfig};
use crate::fleet::forces::{apply_gravity, apply_separation, apply_tether, clear_ship_forces};
use crate::fleet::lifecycle::{handle_goal_sensor, handle_planet_contacts, sync_ship_facing};
use crate::mission::GameState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PhysicsConfig::default())
            // World units are metres; no pixel scaling inside physics.
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
            .add_systems(
                Startup,
                (load_physics_config, configure_timestep, disable_world_gravity).chain(),
            )
            .add_systems(
                Update,
                (clear_ship_forces, apply_gravity, apply_tether, apply_separation)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                (sync_ship_facing, handle_planet_contacts, handle_goal_sensor)
                    .chain()
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Clamp the frame delta fed to the solver so stalls cannot inject energy
/// through the spring and gravity terms.
fn configure_timestep(mut commands: Commands, config: Res<PhysicsConfig>) {
    commands.insert_resource(TimestepMode::Variable {
        max_dt: config.max_step_seconds,
        time_scale: 1.0,
        substeps: config.solver_substeps,
    });
}

/// Rapier's built-in uniform gravity is off; the planet field is the only
/// source of gravity in this world.
fn disable_world_gravity(mut rapier_config: Query<&mut RapierConfiguration>) {
    for mut config in rapier_config.iter_mut() {
        config.gravity = Vec2::ZERO;
    }
}
