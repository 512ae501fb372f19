//! Mission-setup error types.
//!
//! Level data is supplied by collaborators (built-in catalog today) and is
//! validated once before any rigid bodies are created.  A validation failure
//! aborts mission setup; there is no mid-session recovery path, matching the
//! rest of the core which never retries.

use std::fmt;

/// Top-level error enum for mission / level initialization.
#[derive(Debug)]
pub enum SimError {
    /// A level requested more ships than the fleet can hold, or none at all.
    FleetSizeOutOfRange {
        /// Requested ship count.
        requested: usize,
        /// Hard capacity from `FLEET_CAPACITY`.
        capacity: usize,
    },

    /// `required_ships` exceeds the fleet size — the win condition could
    /// never be satisfied.
    RequiredShipsUnreachable {
        required: usize,
        fleet_count: usize,
    },

    /// A geometric quantity that must be strictly positive was not.
    DegenerateGeometry {
        /// Which field was rejected (for logging).
        field: &'static str,
        value: f32,
    },

    /// A physics constant is outside its safe operating range.
    /// Returned by the validation helpers run over loaded config overrides.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::FleetSizeOutOfRange {
                requested,
                capacity,
            } => write!(
                f,
                "fleet size {} outside valid range 1..={}",
                requested, capacity
            ),
            SimError::RequiredShipsUnreachable {
                required,
                fleet_count,
            } => write!(
                f,
                "required_ships {} exceeds fleet size {}",
                required, fleet_count
            ),
            SimError::DegenerateGeometry { field, value } => {
                write!(f, "level field '{}' = {} must be > 0", field, value)
            }
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `hertz` is outside the stable tether range.
///
/// Frequencies approaching the frame rate make the explicit spring stiff
/// enough to oscillate at 60 fps.
pub fn validate_tether_hertz(value: f32) -> SimResult<()> {
    if value <= 0.0 || value > 10.0 {
        Err(SimError::UnsafeConstant {
            name: "TETHER_HERTZ",
            value,
            safe_range: "(0.0, 10.0]",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if `max_accel` is not strictly positive.
pub fn validate_separation_max_accel(value: f32) -> SimResult<()> {
    if value <= 0.0 {
        Err(SimError::UnsafeConstant {
            name: "SEPARATION_MAX_ACCEL",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}
