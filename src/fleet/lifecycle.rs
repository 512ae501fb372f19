//! Post-step ship lifecycle: facing, lethal contacts, goal arrivals.
//!
//! These systems run after Rapier's writeback so they see the freshly
//! integrated transforms, velocities, and collision events for the frame.

use crate::config::PhysicsConfig;
use crate::fleet::state::{Fleet, MissionOutcome, Ship};
use crate::mission::GameState;
use crate::planet::{Goal, Planet};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

/// Point each moving ship along its velocity.
///
/// Facing is cosmetic (rotation is locked on the bodies); below the speed
/// threshold the previous facing is kept to avoid jitter at rest.
pub fn sync_ship_facing(
    config: Res<PhysicsConfig>,
    mut ships: Query<(&Ship, &Velocity, &mut Transform)>,
) {
    for (ship, velocity, mut transform) in ships.iter_mut() {
        if !ship.active() {
            continue;
        }
        let v = velocity.linvel;
        if v.length() > config.facing_speed_threshold {
            transform.rotation = Quat::from_rotation_z(v.y.atan2(v.x));
        }
    }
}

/// Ship-versus-planet contacts are lethal.
///
/// The dead ship's entity survives as a wreck, but its rigid body and
/// collider are disabled so it stops moving and stops generating events.
/// When a loss makes the required-arrivals quota unreachable the attempt
/// fails immediately and remaining events this frame are dropped.
pub fn handle_planet_contacts(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionEvent>,
    mut fleet: ResMut<Fleet>,
    mut ships: Query<&mut Ship>,
    planets: Query<(), With<Planet>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(e1, e2, flags) = event else {
            continue;
        };
        if flags.contains(CollisionEventFlags::SENSOR) {
            continue;
        }
        let ship_entity = if ships.contains(*e1) && planets.contains(*e2) {
            *e1
        } else if ships.contains(*e2) && planets.contains(*e1) {
            *e2
        } else {
            continue;
        };
        let Ok(mut ship) = ships.get_mut(ship_entity) else {
            continue;
        };
        if !ship.active() {
            continue;
        }
        ship.alive = false;
        commands
            .entity(ship_entity)
            .insert((RigidBodyDisabled, ColliderDisabled));
        info!("Ship {} destroyed on planet impact", ship.index);

        if fleet.record_loss() == Some(MissionOutcome::Fail) {
            next_state.set(GameState::Fail);
            return;
        }
    }
}

/// Ships entering the goal sensor are counted as arrived and retired.
///
/// Runs after the contact handler; once the attempt has an outcome any
/// remaining sensor events for the frame are ignored.
pub fn handle_goal_sensor(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionEvent>,
    mut fleet: ResMut<Fleet>,
    mut ships: Query<&mut Ship>,
    goals: Query<(), With<Goal>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in collisions.read() {
        if fleet.outcome.is_some() {
            return;
        }
        let CollisionEvent::Started(e1, e2, flags) = event else {
            continue;
        };
        if !flags.contains(CollisionEventFlags::SENSOR) {
            continue;
        }
        let ship_entity = if ships.contains(*e1) && goals.contains(*e2) {
            *e1
        } else if ships.contains(*e2) && goals.contains(*e1) {
            *e2
        } else {
            continue;
        };
        let Ok(mut ship) = ships.get_mut(ship_entity) else {
            continue;
        };
        if !ship.active() {
            continue;
        }
        ship.arrived = true;
        commands
            .entity(ship_entity)
            .insert((RigidBodyDisabled, ColliderDisabled));
        info!("Ship {} reached the goal", ship.index);

        if fleet.record_arrival() == Some(MissionOutcome::Success) {
            next_state.set(GameState::Success);
            return;
        }
    }
}
