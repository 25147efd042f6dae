use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(RideIdx, Ride);

/// Grid travel-time metric used throughout the engine.
pub fn manhattan(x1: u64, y1: u64, x2: u64, y2: u64) -> u64 {
    x1.abs_diff(x2) + y1.abs_diff(y2)
}

/// A transportation request: pickup `(a, b)`, dropoff `(x, y)` and an
/// inclusive pickup window `[start, end]`.
///
/// `index` is the 0-based position of the ride line in the input and is
/// assigned once by the parser; sorting the ride pool never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ride {
    index: RideIdx,
    a: u64,
    b: u64,
    x: u64,
    y: u64,
    start: u64,
    end: u64,
}

impl Ride {
    pub fn new(index: RideIdx, a: u64, b: u64, x: u64, y: u64, start: u64, end: u64) -> Self {
        Ride {
            index,
            a,
            b,
            x,
            y,
            start,
            end,
        }
    }

    pub fn index(&self) -> RideIdx {
        self.index
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Manhattan distance from pickup to dropoff.
    pub fn length(&self) -> u64 {
        manhattan(self.a, self.b, self.x, self.y)
    }
}
