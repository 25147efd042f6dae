use serde::Serialize;

/// Static configuration of one problem instance: grid bounds, fleet size,
/// declared ride count, early-pickup bonus and the simulation horizon.
///
/// Immutable after construction. An instance with `cars == 0` is still
/// valid and solves to an empty plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    rows: u64,
    cols: u64,
    cars: u64,
    rides: u64,
    bonus: u64,
    steps: u64,
}

impl City {
    pub fn new(rows: u64, cols: u64, cars: u64, rides: u64, bonus: u64, steps: u64) -> Self {
        City {
            rows,
            cols,
            cars,
            rides,
            bonus,
            steps,
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn cols(&self) -> u64 {
        self.cols
    }

    pub fn cars(&self) -> u64 {
        self.cars
    }

    pub fn rides(&self) -> u64 {
        self.rides
    }

    pub fn bonus(&self) -> u64 {
        self.bonus
    }

    /// Simulation time horizon. Cars whose clock reaches this value are
    /// exhausted for the strategies that honor it.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
