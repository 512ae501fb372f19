//! Whole-flight scenario tests built on the pure force helpers.
//!
//! These integrate the force model directly with a small fixed-step
//! semi-implicit Euler loop — no Rapier, no ECS — to check end-to-end flight
//! behaviour: slingshot passes, formation cohesion, and goal arrival timing.

use bevy::prelude::*;
use gravboost::constants::*;
use gravboost::fleet::forces::{separation_accel, tether_force};
use gravboost::gravity::gravity_accel;
use gravboost::level::PlanetSpec;

const DT: f32 = 1.0 / 240.0;

#[derive(Clone, Copy)]
struct Body {
    pos: Vec2,
    vel: Vec2,
}

/// One fixed step of the full force model for a fleet (index 0 = leader).
/// Unit masses throughout.
fn step_fleet(bodies: &mut [Body], planets: &[PlanetSpec]) {
    let positions: Vec<Vec2> = bodies.iter().map(|b| b.pos).collect();
    let leader = bodies[0];

    for (i, body) in bodies.iter_mut().enumerate() {
        let mut accel = gravity_accel(body.pos, planets);
        if i != 0 {
            accel += tether_force(
                body.pos,
                body.vel,
                leader.pos,
                leader.vel,
                1.0,
                TETHER_REST_LENGTH,
                TETHER_HERTZ,
                TETHER_DAMPING_RATIO,
            );
        }
        let neighbours = positions
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, p)| *p);
        accel += separation_accel(
            body.pos,
            neighbours,
            SEPARATION_RADIUS,
            SEPARATION_STRENGTH,
            SEPARATION_MAX_ACCEL,
        );

        body.vel += accel * DT;
        body.pos += body.vel * DT;
    }
}

#[test]
fn slingshot_pass_clears_the_planet() {
    // The classic layout: one planet at the origin, launch from the left
    // with enough lateral offset to swing past instead of impacting.
    let planets = [PlanetSpec {
        position: Vec2::ZERO,
        radius: 2.2,
        mu: 60.0,
        eps: 0.6,
    }];
    let mut fleet = [Body {
        pos: Vec2::new(-15.0, 0.0),
        vel: Vec2::new(24.0, 6.0),
    }];

    let mut min_planet_distance = f32::INFINITY;
    let mut crossed = false;
    for _ in 0..(3.0 / DT) as usize {
        step_fleet(&mut fleet, &planets);
        let d = fleet[0].pos.length();
        min_planet_distance = min_planet_distance.min(d);
        if fleet[0].pos.x > 15.0 {
            crossed = true;
            break;
        }
    }

    assert!(crossed, "ship never made it past the planet");
    assert!(
        min_planet_distance > 2.2,
        "ship grazed the planet: closest approach {min_planet_distance}"
    );
}

#[test]
fn slingshot_pass_roughly_conserves_energy() {
    // Softened gravity is conservative; the integrator should not add or
    // shed more than a few percent over a full pass.
    let planets = [PlanetSpec {
        position: Vec2::ZERO,
        radius: 2.2,
        mu: 60.0,
        eps: 0.6,
    }];
    let energy = |b: &Body| {
        let r = (b.pos.length_squared() + 0.6 * 0.6).sqrt();
        0.5 * b.vel.length_squared() - 60.0 / r
    };

    let mut fleet = [Body {
        pos: Vec2::new(-15.0, 0.0),
        vel: Vec2::new(24.0, 6.0),
    }];
    let e0 = energy(&fleet[0]);
    for _ in 0..(2.0 / DT) as usize {
        step_fleet(&mut fleet, &planets);
    }
    let e1 = energy(&fleet[0]);

    assert!(
        (e1 - e0).abs() / e0.abs() < 0.05,
        "energy drifted from {e0} to {e1}"
    );
}

#[test]
fn escape_launch_never_falls_back() {
    // Launched directly away from the planet well above escape speed
    // (v_esc = √(2μ/r) ≈ 2.8 here), the ship keeps receding forever.
    let planets = [PlanetSpec {
        position: Vec2::ZERO,
        radius: 2.2,
        mu: 60.0,
        eps: 0.6,
    }];
    let mut fleet = [Body {
        pos: Vec2::new(-15.0, 0.0),
        vel: Vec2::new(-18.0, 0.0),
    }];

    let mut last_distance = fleet[0].pos.length();
    for _ in 0..(5.0 / DT) as usize {
        step_fleet(&mut fleet, &planets);
        let d = fleet[0].pos.length();
        assert!(d > 2.2, "escaping ship fell back onto the planet");
        assert!(d >= last_distance, "escaping ship reversed course");
        last_distance = d;
    }
}

#[test]
fn followers_catch_a_launched_leader() {
    // Only the leader is launched; followers start at rest on the formation
    // arc and must be reeled up to the rest length by the tether.
    let mut fleet = vec![Body {
        pos: Vec2::ZERO,
        vel: Vec2::new(10.0, 0.0),
    }];
    for i in 0..4 {
        let angle = std::f32::consts::PI * (0.5 + i as f32 / 3.0);
        fleet.push(Body {
            pos: Vec2::from_angle(angle) * TETHER_REST_LENGTH,
            vel: Vec2::ZERO,
        });
    }

    for _ in 0..(2.0 / DT) as usize {
        step_fleet(&mut fleet, &[]);
    }

    for body in &fleet[1..] {
        let d = (body.pos - fleet[0].pos).length();
        assert!(
            d <= TETHER_REST_LENGTH + 0.75,
            "follower lagging at distance {d} after 2 s"
        );
        assert!((body.vel - fleet[0].vel).length() < 3.0);
    }
}

#[test]
fn stretched_formation_reels_back_in() {
    // Followers start well beyond the rest length; the damped tether must
    // pull them back without ever stretching further and without blowing up.
    let stretch0 = 2.0 * TETHER_REST_LENGTH;
    let mut fleet = vec![Body {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
    }];
    for i in 0..4 {
        let angle = std::f32::consts::TAU * i as f32 / 4.0 + 0.3;
        fleet.push(Body {
            pos: Vec2::from_angle(angle) * stretch0,
            vel: Vec2::ZERO,
        });
    }

    let mut max_distance: f32 = 0.0;
    for _ in 0..(3.0 / DT) as usize {
        step_fleet(&mut fleet, &[]);
        for body in &fleet[1..] {
            assert!(body.pos.is_finite() && body.vel.is_finite());
            max_distance = max_distance.max((body.pos - fleet[0].pos).length());
        }
    }

    assert!(
        max_distance <= stretch0 + 0.1,
        "tether stretched past its start: {max_distance}"
    );
    for body in &fleet[1..] {
        let d = (body.pos - fleet[0].pos).length();
        assert!(
            d <= TETHER_REST_LENGTH + 1.0,
            "follower still adrift at distance {d} after 3 s"
        );
    }
}

#[test]
fn settled_formation_stays_settled() {
    // At the rest length with matched velocities neither the tether nor the
    // separation force has anything to do.
    let mut fleet = vec![Body {
        pos: Vec2::ZERO,
        vel: Vec2::new(5.0, 0.0),
    }];
    for i in 0..4 {
        let angle = std::f32::consts::PI / 2.0 + std::f32::consts::PI * i as f32 / 3.0;
        fleet.push(Body {
            pos: Vec2::from_angle(angle) * TETHER_REST_LENGTH,
            vel: Vec2::new(5.0, 0.0),
        });
    }
    let offsets0: Vec<Vec2> = fleet[1..].iter().map(|b| b.pos - fleet[0].pos).collect();

    for _ in 0..(1.0 / DT) as usize {
        step_fleet(&mut fleet, &[]);
    }

    for (body, offset0) in fleet[1..].iter().zip(&offsets0) {
        let offset = body.pos - fleet[0].pos;
        assert!(
            (offset - *offset0).length() < 1e-3,
            "settled formation drifted by {}",
            (offset - *offset0).length()
        );
    }
}

#[test]
fn straight_shot_arrives_on_schedule() {
    // No planets: constant velocity.  30 units to the goal centre, goal
    // radius 1.2, speed 10 → the rim is crossed just before t = 2.88 s.
    let goal = Vec2::new(15.0, 0.0);
    let goal_radius = 1.2;
    let mut fleet = [Body {
        pos: Vec2::new(-15.0, 0.0),
        vel: Vec2::new(10.0, 0.0),
    }];

    let mut arrival_time = None;
    for step in 0..(4.0 / DT) as usize {
        step_fleet(&mut fleet, &[]);
        if (fleet[0].pos - goal).length() < goal_radius {
            arrival_time = Some(step as f32 * DT);
            break;
        }
    }

    let t = arrival_time.expect("ship never reached the goal");
    assert!((t - 2.88).abs() < 0.1, "arrived at t = {t}");
}
