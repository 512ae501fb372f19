//! Fleet spawning and formation layout.
//!
//! A fleet is one leader plus followers.  Followers start on an arc behind
//! the leader (relative to the goal direction) at the tether rest length, so
//! the formation begins settled: no tether stretch, no separation overlap.

pub mod forces;
pub mod lifecycle;
pub mod state;

use crate::config::PhysicsConfig;
use crate::level::LevelSpec;
use crate::planet::MissionEntity;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use state::{Leader, Ship};

/// Spawn positions for a fleet of `count` ships.
///
/// Index 0 (the leader) sits at `start`.  Followers are spread over a
/// semicircular arc of the given radius on the side opposite `facing`.
pub fn formation_positions(start: Vec2, facing: Vec2, count: usize, radius: f32) -> Vec<Vec2> {
    let mut positions = Vec::with_capacity(count);
    positions.push(start);
    if count <= 1 {
        return positions;
    }

    let behind = if facing.length_squared() > 0.0 {
        (-facing).normalize()
    } else {
        Vec2::NEG_X
    };
    let base_angle = behind.y.atan2(behind.x);
    let followers = count - 1;
    let span = std::f32::consts::PI;
    for i in 0..followers {
        // Evenly spaced across the arc, centred on the behind direction.
        let t = if followers == 1 {
            0.0
        } else {
            i as f32 / (followers - 1) as f32 - 0.5
        };
        let angle = base_angle + t * span;
        positions.push(start + Vec2::from_angle(angle) * radius);
    }
    positions
}

/// Spawn the fleet rigid bodies for one mission attempt.
///
/// Ships are dynamic balls with CCD (they are small and fast, and must not
/// tunnel through planet rims) and locked rotation — facing is set
/// cosmetically from velocity after each step.
pub fn spawn_fleet(
    commands: &mut Commands,
    config: &PhysicsConfig,
    level: &LevelSpec,
) -> Vec<Entity> {
    let facing = level.goal - level.start;
    let positions = formation_positions(
        level.start,
        facing,
        level.fleet_count,
        config.tether_rest_length,
    );

    positions
        .iter()
        .enumerate()
        .map(|(index, pos)| {
            let mut entity = commands.spawn((
                Ship::new(index),
                MissionEntity,
                RigidBody::Dynamic,
                Collider::ball(config.ship_radius),
                Ccd::enabled(),
                LockedAxes::ROTATION_LOCKED,
                Velocity::zero(),
                ExternalForce::default(),
                ReadMassProperties::default(),
                ActiveEvents::COLLISION_EVENTS,
                Transform::from_translation(pos.extend(0.0)),
            ));
            if index == 0 {
                entity.insert(Leader);
            }
            entity.id()
        })
        .collect()
}
