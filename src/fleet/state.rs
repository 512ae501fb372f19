//! Fleet bookkeeping: per-ship status components and the fleet-wide tally.

use bevy::prelude::*;

/// How the current mission attempt ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    Success,
    Fail,
}

/// Per-ship status.  `index` 0 is the leader.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ship {
    pub index: usize,
    /// False once the ship has hit a planet.  Dead ships keep their entity
    /// (the wreck stays visible) but their rigid body is disabled.
    pub alive: bool,
    /// True once the ship has entered the goal sensor.
    pub arrived: bool,
}

impl Ship {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            alive: true,
            arrived: false,
        }
    }

    /// A ship still participating in forces and events.
    pub fn active(&self) -> bool {
        self.alive && !self.arrived
    }
}

/// Marker on the tether leader (ship index 0).
#[derive(Component, Debug, Clone, Copy)]
pub struct Leader;

/// Fleet-wide tally, updated by the contact and sensor systems.
///
/// The win and loss conditions read from here:
/// * FAIL as soon as `alive_count < required_ships`.
/// * SUCCESS as soon as `arrived_count >= required_ships`.
#[derive(Resource, Debug, Clone)]
pub struct Fleet {
    pub fleet_count: usize,
    pub required_ships: usize,
    pub alive_count: usize,
    pub arrived_count: usize,
    /// Set exactly once per attempt; later events in the same frame are
    /// ignored so an attempt cannot both succeed and fail.
    pub outcome: Option<MissionOutcome>,
}

impl Fleet {
    pub fn new(fleet_count: usize, required_ships: usize) -> Self {
        Self {
            fleet_count,
            required_ships,
            alive_count: fleet_count,
            arrived_count: 0,
            outcome: None,
        }
    }

    /// Record a lethal planet contact.  Returns the outcome if this loss
    /// makes the win condition unreachable.
    pub fn record_loss(&mut self) -> Option<MissionOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        self.alive_count = self.alive_count.saturating_sub(1);
        if self.alive_count + self.arrived_count < self.required_ships {
            self.outcome = Some(MissionOutcome::Fail);
            return self.outcome;
        }
        None
    }

    /// Record a goal arrival.  Returns the outcome if the quota is met.
    pub fn record_arrival(&mut self) -> Option<MissionOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        self.arrived_count += 1;
        self.alive_count = self.alive_count.saturating_sub(1);
        if self.arrived_count >= self.required_ships {
            self.outcome = Some(MissionOutcome::Success);
            return self.outcome;
        }
        None
    }
}
