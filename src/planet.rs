//! Planet and goal entities.
//!
//! Planets are fixed rigid bodies with solid ball colliders; any ship contact
//! is lethal.  The goal is a fixed ball *sensor* — ships pass through it and
//! raise sensor events rather than contacts.

use crate::level::{CurrentLevel, PlanetSpec};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Marker for a gravity-source planet.  Carries the field parameters so the
/// force systems can query planets directly instead of re-reading the level.
#[derive(Component, Debug, Clone, Copy)]
pub struct Planet {
    pub mu: f32,
    pub eps: f32,
    pub radius: f32,
}

/// Marker for the goal sensor region.
#[derive(Component, Debug, Clone, Copy)]
pub struct Goal {
    pub radius: f32,
}

/// Everything spawned for one mission attempt; despawned wholesale on reset.
#[derive(Component, Debug, Clone, Copy)]
pub struct MissionEntity;

pub fn spawn_planet(commands: &mut Commands, spec: &PlanetSpec) -> Entity {
    commands
        .spawn((
            Planet {
                mu: spec.mu,
                eps: spec.eps,
                radius: spec.radius,
            },
            MissionEntity,
            RigidBody::Fixed,
            Collider::ball(spec.radius),
            Transform::from_translation(spec.position.extend(0.0)),
        ))
        .id()
}

pub fn spawn_goal(commands: &mut Commands, center: Vec2, radius: f32) -> Entity {
    commands
        .spawn((
            Goal { radius },
            MissionEntity,
            RigidBody::Fixed,
            Collider::ball(radius),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(center.extend(0.0)),
        ))
        .id()
}

/// Spawn all static geometry for the current level.
pub fn spawn_level_geometry(commands: &mut Commands, level: &CurrentLevel) {
    for spec in &level.spec.planets {
        spawn_planet(commands, spec);
    }
    spawn_goal(commands, level.spec.goal, level.spec.goal_radius);
}
