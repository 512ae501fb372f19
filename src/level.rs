//! Built-in level catalog and level validation.
//!
//! A level supplies, at mission-setup time, the planet list (position,
//! radius, μ, ε), the fleet start position, the launch speed cap, the goal
//! sensor geometry, the fleet size and required-arrival count, and the world
//! bounds used by the renderer.  The simulation core treats all of this as
//! read-only input; switching levels tears everything down and rebuilds.
//!
//! JSON level files are intentionally not part of this crate; the starter
//! levels are compiled in.

use crate::constants::FLEET_CAPACITY;
use crate::error::{SimError, SimResult};
use bevy::prelude::*;

/// Immutable description of one gravity source.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    /// World-space centre.
    pub position: Vec2,
    /// Solid collider radius (world units).
    pub radius: f32,
    /// Gravitational parameter μ — strength of the attraction.
    pub mu: f32,
    /// Softening parameter ε — prevents the singularity at zero distance.
    /// May be configured as 0, in which case accelerations near the centre
    /// grow large but stay finite for any nonzero distance.
    pub eps: f32,
}

/// Complete read-only description of a playable level.
#[derive(Debug, Clone)]
pub struct LevelSpec {
    /// Display name shown in the HUD.
    pub name: &'static str,
    pub planets: Vec<PlanetSpec>,
    /// Leader spawn position; followers form up around it.
    pub start: Vec2,
    /// Upper bound on the launch speed the drag gesture can produce.
    pub max_launch_speed: f32,
    /// Goal sensor centre.
    pub goal: Vec2,
    /// Goal sensor radius.
    pub goal_radius: f32,
    /// Total ships in the fleet (leader included).
    pub fleet_count: usize,
    /// How many ships must arrive for the mission to succeed.
    pub required_ships: usize,
    /// Half-extents of the playfield rectangle drawn by the renderer.
    pub bounds: Vec2,
}

impl LevelSpec {
    /// Reject degenerate level data before any rigid bodies are created.
    ///
    /// Zero planets is explicitly valid (the gravity field evaluates to the
    /// zero vector); everything geometric must be strictly positive.
    pub fn validate(&self) -> SimResult<()> {
        if self.fleet_count == 0 || self.fleet_count > FLEET_CAPACITY {
            return Err(SimError::FleetSizeOutOfRange {
                requested: self.fleet_count,
                capacity: FLEET_CAPACITY,
            });
        }
        if self.required_ships > self.fleet_count {
            return Err(SimError::RequiredShipsUnreachable {
                required: self.required_ships,
                fleet_count: self.fleet_count,
            });
        }
        if self.goal_radius <= 0.0 {
            return Err(SimError::DegenerateGeometry {
                field: "goal_radius",
                value: self.goal_radius,
            });
        }
        if self.max_launch_speed <= 0.0 {
            return Err(SimError::DegenerateGeometry {
                field: "max_launch_speed",
                value: self.max_launch_speed,
            });
        }
        for planet in &self.planets {
            if planet.radius <= 0.0 {
                return Err(SimError::DegenerateGeometry {
                    field: "planet.radius",
                    value: planet.radius,
                });
            }
        }
        Ok(())
    }
}

/// Number-key bindings for level selection, in catalog order.  Shared by the
/// main menu and the in-mission level switch so the two cannot drift.
pub const LEVEL_SELECT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Catalog of compiled-in levels, selectable with the number keys.
#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    pub levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    pub fn level(&self, index: usize) -> Option<&LevelSpec> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self {
            levels: vec![
                // The classic single-planet slingshot.
                LevelSpec {
                    name: "Slingshot",
                    planets: vec![PlanetSpec {
                        position: Vec2::ZERO,
                        radius: 2.2,
                        mu: 60.0,
                        eps: 0.6,
                    }],
                    start: Vec2::new(-15.0, 0.0),
                    max_launch_speed: 25.0,
                    goal: Vec2::new(15.0, 0.0),
                    goal_radius: 1.2,
                    fleet_count: 5,
                    required_ships: 3,
                    bounds: Vec2::new(20.0, 12.0),
                },
                // Two offset planets forming an S-curve corridor.
                LevelSpec {
                    name: "Binary Pass",
                    planets: vec![
                        PlanetSpec {
                            position: Vec2::new(-5.0, 3.5),
                            radius: 1.6,
                            mu: 45.0,
                            eps: 0.5,
                        },
                        PlanetSpec {
                            position: Vec2::new(5.0, -3.5),
                            radius: 1.6,
                            mu: 45.0,
                            eps: 0.5,
                        },
                    ],
                    start: Vec2::new(-16.0, -6.0),
                    max_launch_speed: 25.0,
                    goal: Vec2::new(16.0, 6.0),
                    goal_radius: 1.4,
                    fleet_count: 5,
                    required_ships: 3,
                    bounds: Vec2::new(20.0, 12.0),
                },
                // Heavy central mass; the whole fleet must survive.
                LevelSpec {
                    name: "Deep Well",
                    planets: vec![PlanetSpec {
                        position: Vec2::new(0.0, 1.0),
                        radius: 3.0,
                        mu: 110.0,
                        eps: 0.8,
                    }],
                    start: Vec2::new(-16.0, -8.0),
                    max_launch_speed: 22.0,
                    goal: Vec2::new(16.0, -8.0),
                    goal_radius: 1.2,
                    fleet_count: 4,
                    required_ships: 4,
                    bounds: Vec2::new(20.0, 12.0),
                },
            ],
        }
    }
}

/// The level the current mission is built from.
///
/// Replaced wholesale on level switch; mission setup reads it on every
/// `OnEnter(Aim)` rebuild.
#[derive(Resource, Debug, Clone)]
pub struct CurrentLevel {
    /// Index into the catalog (for the HUD and level-select keys).
    pub index: usize,
    pub spec: LevelSpec,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        let catalog = LevelCatalog::default();
        Self {
            index: 0,
            spec: catalog.levels[0].clone(),
        }
    }
}
