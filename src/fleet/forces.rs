//! Per-frame force generation for the fleet.
//!
//! Three forces act on every active ship, accumulated into its rigid body's
//! `ExternalForce` each frame in a fixed order: gravity, then the leader
//! tether, then pairwise separation.  Forces are cleared at the top of the
//! frame; Rapier integrates them during its own step.
//!
//! Each force has a pure helper (unit-testable, no ECS) and a thin system
//! that queries the world and calls it.

use crate::config::PhysicsConfig;
use crate::constants::LENGTH_EPSILON;
use crate::fleet::state::{Leader, Ship};
use crate::gravity::gravity_accel;
use crate::level::PlanetSpec;
use crate::planet::Planet;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Pure helpers ──────────────────────────────────────────────────────────────

/// Spring-damper force pulling a follower toward its leader.
///
/// Stiffness is expressed as a frequency: `k = (2π·hertz)²·m`, damping as a
/// ratio of critical: `c = 2·ζ·(2π·hertz)·m`.  The tether is one-way — it
/// only ever pulls.  Inside the rest length (stretch ≤ 0) the force is zero,
/// so the formation never gets pushed apart by its own tether.
pub fn tether_force(
    follower_pos: Vec2,
    follower_vel: Vec2,
    leader_pos: Vec2,
    leader_vel: Vec2,
    mass: f32,
    rest_length: f32,
    hertz: f32,
    damping_ratio: f32,
) -> Vec2 {
    let offset = leader_pos - follower_pos;
    let dist = offset.length();
    let stretch = dist - rest_length;
    if stretch <= 0.0 || dist < LENGTH_EPSILON {
        return Vec2::ZERO;
    }
    let axis = offset / dist;
    let omega = std::f32::consts::TAU * hertz;
    let k = omega * omega * mass;
    let c = 2.0 * damping_ratio * omega * mass;
    // Relative velocity along the axis; positive when separating.
    let separating_speed = (follower_vel - leader_vel).dot(-axis);
    axis * (k * stretch + c * separating_speed)
}

/// Summed separation acceleration on one ship from its close neighbours.
///
/// Neighbours outside `radius` contribute nothing (checked on the squared
/// distance, no sqrt).  Inside, the weight ramps quadratically from 0 at the
/// radius to 1 at contact.  The sum is clamped to `max_accel` so a tight
/// launch cluster cannot produce a force spike.
pub fn separation_accel(
    pos: Vec2,
    neighbours: impl IntoIterator<Item = Vec2>,
    radius: f32,
    strength: f32,
    max_accel: f32,
) -> Vec2 {
    let radius_sq = radius * radius;
    let mut accel = Vec2::ZERO;
    for other in neighbours {
        let d = pos - other;
        let d_sq = d.length_squared();
        if d_sq >= radius_sq {
            continue;
        }
        let dist = (d_sq + LENGTH_EPSILON).sqrt();
        // The epsilon under the sqrt can nudge `dist` past `radius` right at
        // the boundary; clamp so the weight never goes negative.
        let t = (1.0 - dist / radius).clamp(0.0, 1.0);
        let weight = t * t;
        accel += (d / dist) * (strength * weight);
    }
    accel.clamp_length_max(max_accel)
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Zero every ship's accumulated force at the top of the frame.
pub fn clear_ship_forces(mut ships: Query<&mut ExternalForce, With<Ship>>) {
    for mut force in ships.iter_mut() {
        force.force = Vec2::ZERO;
        force.torque = 0.0;
    }
}

/// Apply the planet gravity field to every active ship.
pub fn apply_gravity(
    planets: Query<(&Planet, &Transform)>,
    mut ships: Query<(&Ship, &Transform, &ReadMassProperties, &mut ExternalForce)>,
) {
    let field: Vec<PlanetSpec> = planets
        .iter()
        .map(|(planet, transform)| PlanetSpec {
            position: transform.translation.truncate(),
            radius: planet.radius,
            mu: planet.mu,
            eps: planet.eps,
        })
        .collect();

    for (ship, transform, mass_props, mut force) in ships.iter_mut() {
        if !ship.active() {
            continue;
        }
        let mass = ship_mass(mass_props);
        let accel = gravity_accel(transform.translation.truncate(), &field);
        force.force += accel * mass;
    }
}

/// Pull every follower toward the leader with the one-way tether spring.
///
/// If the leader is dead (or arrived) the tether contributes nothing and
/// followers coast ballistically under gravity alone.
pub fn apply_tether(
    config: Res<PhysicsConfig>,
    leader: Query<(&Ship, &Transform, &Velocity), With<Leader>>,
    mut followers: Query<
        (&Ship, &Transform, &Velocity, &ReadMassProperties, &mut ExternalForce),
        Without<Leader>,
    >,
) {
    let Ok((leader_ship, leader_transform, leader_vel)) = leader.single() else {
        return;
    };
    if !leader_ship.active() {
        return;
    }
    let leader_pos = leader_transform.translation.truncate();

    for (ship, transform, vel, mass_props, mut force) in followers.iter_mut() {
        if !ship.active() {
            continue;
        }
        force.force += tether_force(
            transform.translation.truncate(),
            vel.linvel,
            leader_pos,
            leader_vel.linvel,
            ship_mass(mass_props),
            config.tether_rest_length,
            config.tether_hertz,
            config.tether_damping_ratio,
        );
    }
}

/// Push overlapping fleet ships apart.
///
/// Computed per ship against all other active ships; when one of a close
/// pair dies mid-frame the survivor still gets its push, so the force is
/// deliberately not symmetric.
pub fn apply_separation(
    config: Res<PhysicsConfig>,
    mut ships: Query<(Entity, &Ship, &Transform, &ReadMassProperties, &mut ExternalForce)>,
) {
    let positions: Vec<(Entity, Vec2)> = ships
        .iter()
        .filter(|(_, ship, ..)| ship.active())
        .map(|(entity, _, transform, ..)| (entity, transform.translation.truncate()))
        .collect();

    for (entity, ship, transform, mass_props, mut force) in ships.iter_mut() {
        if !ship.active() {
            continue;
        }
        let pos = transform.translation.truncate();
        let neighbours = positions
            .iter()
            .filter(|(other, _)| *other != entity)
            .map(|(_, p)| *p);
        let accel = separation_accel(
            pos,
            neighbours,
            config.separation_radius,
            config.separation_strength,
            config.separation_max_accel,
        );
        force.force += accel * ship_mass(mass_props);
    }
}

/// Rapier writes mass properties back after the first step; until then the
/// reported mass is zero.  Fall back to 1 so launch-frame forces stay sane.
fn ship_mass(props: &ReadMassProperties) -> f32 {
    let mass = props.get().mass;
    if mass > 0.0 {
        mass
    } else {
        1.0
    }
}
