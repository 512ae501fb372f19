//! Mission state machine and mission setup / teardown.
//!
//! The game moves through a small set of states:
//!
//! ```text
//! MainMenu ──start──▶ Aim ──launch──▶ Playing ──quota met──▶ Success
//!                      ▲                │  ▲                    │
//!                      │                │  └── Esc ──▶ Paused   │
//!                      │                ▼                       │
//!                      │              Fail ◀── quota unreachable│
//!                      └────────── R (retry) ◀──────────────────┘
//! ```
//!
//! Entering `Aim` despawns every mission entity and rebuilds the level from
//! `CurrentLevel`, so retry and level-switch share one code path.  The
//! physics pipeline only advances in `Playing`; in every other state the
//! rigid bodies are frozen in place.

use crate::config::PhysicsConfig;
use crate::error::SimResult;
use crate::fleet::spawn_fleet;
use crate::fleet::state::Fleet;
use crate::level::{CurrentLevel, LevelCatalog, LEVEL_SELECT_KEYS};
use crate::planet::{spawn_level_geometry, MissionEntity};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    /// Fleet spawned and frozen; the player drags out a launch vector.
    Aim,
    /// Physics advancing, forces live.
    Playing,
    Paused,
    Success,
    Fail,
}

pub struct MissionPlugin;

impl Plugin for MissionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<LevelCatalog>()
            .init_resource::<CurrentLevel>()
            .add_systems(OnEnter(GameState::Aim), setup_mission)
            .add_systems(OnEnter(GameState::MainMenu), despawn_mission)
            .add_systems(OnEnter(GameState::Playing), resume_physics)
            .add_systems(OnExit(GameState::Playing), pause_physics)
            .add_systems(
                Update,
                (
                    toggle_pause.run_if(in_state(GameState::Playing).or(in_state(GameState::Paused))),
                    retry_mission.run_if(not(in_state(GameState::MainMenu))),
                    select_level.run_if(not(in_state(GameState::MainMenu))),
                ),
            );
    }
}

/// Despawn any previous attempt and build the current level from scratch.
///
/// Shared by mission entry, retry, and level switch.
fn rebuild_mission(
    commands: &mut Commands,
    existing: &Query<Entity, With<MissionEntity>>,
    config: &PhysicsConfig,
    level: &CurrentLevel,
) -> SimResult<()> {
    level.spec.validate()?;
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    commands.insert_resource(Fleet::new(
        level.spec.fleet_count,
        level.spec.required_ships,
    ));
    spawn_level_geometry(commands, level);
    spawn_fleet(commands, config, &level.spec);
    info!(
        "Mission set up: level '{}', {} ships, {} required",
        level.spec.name, level.spec.fleet_count, level.spec.required_ships
    );
    Ok(())
}

fn setup_mission(
    mut commands: Commands,
    existing: Query<Entity, With<MissionEntity>>,
    config: Res<PhysicsConfig>,
    level: Res<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Err(e) = rebuild_mission(&mut commands, &existing, &config, &level) {
        eprintln!("⚠ Level '{}' rejected: {e}", level.spec.name);
        next_state.set(GameState::MainMenu);
    }
}

fn despawn_mission(mut commands: Commands, existing: Query<Entity, With<MissionEntity>>) {
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
}

/// Esc toggles between Playing and Paused.  Nothing else changes: the
/// physics gate freezes the world while paused.
fn toggle_pause(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        match state.get() {
            GameState::Playing => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::Playing),
            _ => {}
        }
    }
}

/// R restarts the current level from any in-mission state.
fn retry_mission(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut commands: Commands,
    existing: Query<Entity, With<MissionEntity>>,
    config: Res<PhysicsConfig>,
    level: Res<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    if *state.get() == GameState::Aim {
        // Already aiming: rebuild in place, no state transition fires.
        if let Err(e) = rebuild_mission(&mut commands, &existing, &config, &level) {
            eprintln!("⚠ Level '{}' rejected: {e}", level.spec.name);
        }
    } else {
        next_state.set(GameState::Aim);
    }
}

/// Number keys jump straight to a catalog level and restart in Aim.
fn select_level(
    keys: Res<ButtonInput<KeyCode>>,
    catalog: Res<LevelCatalog>,
    mut level: ResMut<CurrentLevel>,
    state: Res<State<GameState>>,
    mut commands: Commands,
    existing: Query<Entity, With<MissionEntity>>,
    config: Res<PhysicsConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (index, key) in LEVEL_SELECT_KEYS.iter().enumerate() {
        if !keys.just_pressed(*key) {
            continue;
        }
        let Some(spec) = catalog.level(index) else {
            continue;
        };
        level.index = index;
        level.spec = spec.clone();
        if *state.get() == GameState::Aim {
            if let Err(e) = rebuild_mission(&mut commands, &existing, &config, &level) {
                eprintln!("⚠ Level '{}' rejected: {e}", level.spec.name);
            }
        } else {
            next_state.set(GameState::Aim);
        }
        return;
    }
}

/// Freeze the Rapier pipeline outside Playing.
///
/// Aiming, paused, and post-mission states keep every body exactly where
/// the last step left it.
fn pause_physics(mut rapier_config: Query<&mut RapierConfiguration>) {
    for mut config in rapier_config.iter_mut() {
        config.physics_pipeline_active = false;
    }
}

fn resume_physics(mut rapier_config: Query<&mut RapierConfiguration>) {
    for mut config in rapier_config.iter_mut() {
        config.physics_pipeline_active = true;
    }
}
