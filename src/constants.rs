//! Centralised physics and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::PhysicsConfig`] mirrors every constant and can override
//! any of them from `assets/physics.toml` without recompiling.

// ── Simulation Step ───────────────────────────────────────────────────────────

/// Upper bound on the per-frame time delta fed to the physics step (seconds).
///
/// Frame-rate stalls otherwise inject non-physical energy through the spring
/// and gravity terms.  50 ms ≈ a 20 fps floor; anything slower is clamped.
pub const MAX_STEP_SECONDS: f32 = 0.05;

/// Fixed solver sub-step count for each Rapier world advance.
pub const SOLVER_SUBSTEPS: usize = 4;

/// Speed (u/s) below which a ship's facing angle is left unchanged.
///
/// Recomputing facing from a near-zero velocity vector produces visible
/// jitter; below this threshold the last facing is kept.
pub const FACING_SPEED_THRESHOLD: f32 = 0.01;

// ── Fleet Geometry ────────────────────────────────────────────────────────────

/// Hard upper bound on ships per fleet.  Level data requesting more is
/// rejected at validation time.
pub const FLEET_CAPACITY: usize = 10;

/// Collider radius of a single ship (world units).
pub const SHIP_RADIUS: f32 = 0.25;

// ── Tether ────────────────────────────────────────────────────────────────────

/// Rest length of the leader tether; also the follower formation radius.
///
/// Followers feel no tether force until their leader distance exceeds this.
pub const TETHER_REST_LENGTH: f32 = 2.0;

/// Tether spring stiffness expressed as an oscillation frequency (Hz).
///
/// Converted per-frame to a spring constant via `k = (2π·hertz)²·mass`.
/// Tested range: 0.8–2.0.  Higher values snap followers back harder but
/// start to fight the separation force at launch.
pub const TETHER_HERTZ: f32 = 1.2;

/// Tether damping ratio (1.0 = critically damped).
///
/// 0.7 keeps a little springiness in the formation without visible
/// oscillation once the fleet settles behind the leader.
pub const TETHER_DAMPING_RATIO: f32 = 0.7;

// ── Separation ────────────────────────────────────────────────────────────────

/// Distance (u) below which two fleet ships repel each other.
pub const SEPARATION_RADIUS: f32 = 1.0;

/// Peak separation acceleration (u/s²) at zero distance, before clamping.
pub const SEPARATION_STRENGTH: f32 = 8.0;

/// Per-ship clamp on the accumulated separation acceleration (u/s²).
///
/// Prevents force spikes when many neighbours overlap at launch.
pub const SEPARATION_MAX_ACCEL: f32 = 40.0;

// ── Launch ────────────────────────────────────────────────────────────────────

/// Minimum drag length (world units) for a release to count as a launch.
///
/// Shorter drags are treated as accidental clicks and ignored.
pub const MIN_DRAG_DISTANCE: f32 = 0.35;

/// Launch speed per world unit of drag length.
pub const LAUNCH_SPEED_SCALE: f32 = 2.0;

// ── Numeric Guards ────────────────────────────────────────────────────────────

/// Additive epsilon used under square roots and in divisions by a vector
/// length, so coincident points never divide by zero.
pub const LENGTH_EPSILON: f32 = 1e-6;

// ── Camera / HUD ──────────────────────────────────────────────────────────────

/// Orthographic camera scale: world units per screen pixel.
///
/// 1/30 gives a 30 px-per-unit framing: a 1280×720 window shows roughly
/// 42×24 world units.
pub const CAMERA_METERS_PER_PIXEL: f32 = 1.0 / 30.0;

/// Font size for the fleet-status HUD line.
pub const HUD_FONT_SIZE: f32 = 16.0;

/// Font size for the success / fail banner.
pub const BANNER_FONT_SIZE: f32 = 44.0;
