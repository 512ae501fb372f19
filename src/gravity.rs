//! Softened point-mass gravity field.
//!
//! Every planet contributes an inverse-square attraction softened by its ε
//! parameter, so the field stays finite (and smooth) arbitrarily close to a
//! planet centre.  The field is a pure function of position — ships do not
//! attract each other and do not perturb the planets.

use crate::level::PlanetSpec;
use bevy::prelude::*;

/// Acceleration of the gravity field at `pos`, summed over all planets.
///
/// Per planet: `a = μ · d / (|d|² + ε²)^(3/2)` where `d` points from the
/// sample position to the planet centre.  A ship exactly at a planet centre
/// with ε = 0 contributes nothing from that planet rather than NaN.
pub fn gravity_accel(pos: Vec2, planets: &[PlanetSpec]) -> Vec2 {
    let mut accel = Vec2::ZERO;
    for planet in planets {
        let d = planet.position - pos;
        let soft_sq = d.length_squared() + planet.eps * planet.eps;
        if soft_sq <= 0.0 {
            continue;
        }
        let inv_cube = soft_sq.powf(-1.5);
        accel += d * (planet.mu * inv_cube);
    }
    accel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_at(position: Vec2, mu: f32, eps: f32) -> PlanetSpec {
        PlanetSpec {
            position,
            radius: 1.0,
            mu,
            eps,
        }
    }

    #[test]
    fn no_planets_means_zero_field() {
        assert_eq!(gravity_accel(Vec2::new(3.0, -4.0), &[]), Vec2::ZERO);
    }

    #[test]
    fn field_points_toward_the_planet() {
        let planets = [planet_at(Vec2::ZERO, 60.0, 0.6)];
        let accel = gravity_accel(Vec2::new(10.0, 0.0), &planets);
        assert!(accel.x < 0.0);
        assert!(accel.y.abs() < 1e-6);
    }

    #[test]
    fn far_field_approaches_inverse_square() {
        // At distances much larger than ε the softening is negligible:
        // |a| ≈ μ / r².
        let planets = [planet_at(Vec2::ZERO, 60.0, 0.6)];
        let r = 100.0;
        let mag = gravity_accel(Vec2::new(r, 0.0), &planets).length();
        let expected = 60.0 / (r * r);
        assert!((mag - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn field_magnitude_is_monotone_beyond_the_softening_radius() {
        // Past ε the field strength only falls off with distance.
        let planets = [planet_at(Vec2::ZERO, 60.0, 0.6)];
        let mut previous = f32::INFINITY;
        for r in [1.0, 2.0, 4.0, 8.0, 16.0, 32.0] {
            let mag = gravity_accel(Vec2::new(r, 0.0), &planets).length();
            assert!(
                mag <= previous,
                "field grew from {previous} to {mag} at r = {r}"
            );
            previous = mag;
        }
    }

    #[test]
    fn softening_caps_the_field_near_the_centre() {
        // With ε > 0 the magnitude peaks at d = ε/√2 and falls back to zero
        // at the centre; nothing diverges.
        let planets = [planet_at(Vec2::ZERO, 60.0, 0.6)];
        let near = gravity_accel(Vec2::new(0.01, 0.0), &planets).length();
        let peak_bound = 60.0 / (0.6 * 0.6);
        assert!(near.is_finite());
        assert!(near < peak_bound);

        // Exactly at the centre of an isolated softened planet: d = 0, so
        // the contribution vanishes outright.
        assert_eq!(gravity_accel(Vec2::ZERO, &planets), Vec2::ZERO);
    }

    #[test]
    fn ship_at_unsoftened_centre_is_finite() {
        let planets = [planet_at(Vec2::new(2.0, 2.0), 60.0, 0.0)];
        let accel = gravity_accel(Vec2::new(2.0, 2.0), &planets);
        assert_eq!(accel, Vec2::ZERO);
    }

    #[test]
    fn planets_superpose_linearly() {
        let a = planet_at(Vec2::new(-5.0, 0.0), 40.0, 0.5);
        let b = planet_at(Vec2::new(5.0, 0.0), 40.0, 0.5);
        let sample = Vec2::new(0.0, 3.0);
        let combined = gravity_accel(sample, &[a, b]);
        let separate = gravity_accel(sample, &[a]) + gravity_accel(sample, &[b]);
        assert!((combined - separate).length() < 1e-6);

        // Symmetric twin planets cancel horizontally on the midline.
        assert!(combined.x.abs() < 1e-6);
        assert!(combined.y < 0.0);
    }
}
