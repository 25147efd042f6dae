use std::cmp::Ordering;

use serde::Serialize;

use crate::problem::{City, Ride, RideIdx, manhattan};

use super::plan::Car;

/// Outcome of assigning one ride to one car at a specific car state.
///
/// Computed once at construction from the `(car, ride)` pair; immutable
/// thereafter. A candidate that is never committed is simply dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Move {
    ride: RideIdx,
    origin_x: u64,
    origin_y: u64,
    dest_x: u64,
    dest_y: u64,
    actual_start: u64,
    actual_pickup: u64,
    actual_dropoff: u64,
    score: u64,
    value: f64,
}

impl Move {
    pub fn ride(&self) -> RideIdx {
        self.ride
    }

    pub fn origin(&self) -> (u64, u64) {
        (self.origin_x, self.origin_y)
    }

    pub fn destination(&self) -> (u64, u64) {
        (self.dest_x, self.dest_y)
    }

    pub fn actual_start(&self) -> u64 {
        self.actual_start
    }

    pub fn actual_pickup(&self) -> u64 {
        self.actual_pickup
    }

    pub fn actual_dropoff(&self) -> u64 {
        self.actual_dropoff
    }

    /// Points this move contributes to the plan total.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Time-normalized desirability, used only to rank candidates.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Candidate ranking: higher `value`, then earlier dropoff (free the
    /// car sooner), then lower ride index. `Ordering::Greater` means
    /// `self` is the better candidate.
    pub fn candidate_cmp(&self, other: &Move) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then_with(|| other.actual_dropoff.cmp(&self.actual_dropoff))
            .then_with(|| other.ride.cmp(&self.ride))
    }
}

/// Scores a candidate assignment of `ride` to `car` in its current state.
///
/// Pure with respect to both arguments; callers decide whether to commit
/// the returned move.
pub fn evaluate(city: &City, car: &Car, ride: &Ride) -> Move {
    let travel = manhattan(car.x(), car.y(), ride.a(), ride.b());
    let actual_start = car.t();
    let actual_pickup = (actual_start + travel).max(ride.start());
    let actual_dropoff = actual_pickup + ride.length();

    let mut score = 0;
    if actual_pickup <= ride.start() {
        score += city.bonus();
    }
    if actual_dropoff <= ride.end() {
        score += ride.length();
    }

    let elapsed = actual_dropoff - actual_start;
    // A zero-length ride reached with no travel and no wait costs nothing;
    // rank it by its raw score instead of dividing by zero.
    let value = if elapsed == 0 {
        score as f64
    } else {
        score as f64 / elapsed as f64
    };

    Move {
        ride: ride.index(),
        origin_x: car.x(),
        origin_y: car.y(),
        dest_x: ride.x(),
        dest_y: ride.y(),
        actual_start,
        actual_pickup,
        actual_dropoff,
        score,
        value,
    }
}
