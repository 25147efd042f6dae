use std::fmt::Write as _;

use serde::Serialize;

use crate::define_index_newtype;

use super::evaluate::Move;

define_index_newtype!(CarIdx, Car);

/// A vehicle accumulating committed rides over simulated time.
///
/// Cars start at the grid origin at `t = 0` and are owned exclusively by
/// one solve; committing a move teleports the car's bookkeeping to the
/// move's dropoff point and time.
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    index: CarIdx,
    x: u64,
    y: u64,
    t: u64,
    moves: Vec<Move>,
}

impl Car {
    pub fn new(index: CarIdx) -> Self {
        Car {
            index,
            x: 0,
            y: 0,
            t: 0,
            moves: Vec::new(),
        }
    }

    pub fn index(&self) -> CarIdx {
        self.index
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn t(&self) -> u64 {
        self.t
    }

    /// Committed moves, in commitment order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn commit(&mut self, candidate: Move) {
        let (x, y) = candidate.destination();
        self.x = x;
        self.y = y;
        self.t = candidate.actual_dropoff();
        self.moves.push(candidate);
    }

    /// A car past the simulation horizon takes no further candidates in
    /// the strategies that honor exhaustion.
    pub fn is_exhausted(&self, steps: u64) -> bool {
        self.t >= steps
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, x: u64, y: u64, t: u64) {
        self.x = x;
        self.y = y;
        self.t = t;
    }
}

/// The committed assignment of one solve: every car with its move
/// sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    cars: Vec<Car>,
}

impl Plan {
    pub fn with_cars(count: u64) -> Self {
        Plan {
            cars: (0..count as usize).map(|i| Car::new(CarIdx::new(i))).collect(),
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, index: CarIdx) -> &Car {
        &self.cars[index]
    }

    pub fn commit(&mut self, index: CarIdx, candidate: Move) {
        self.cars[index].commit(candidate);
    }

    /// Sum of committed move scores across the fleet. Never recomputes a
    /// move's score.
    pub fn total_score(&self) -> u64 {
        self.cars
            .iter()
            .flat_map(|car| car.moves())
            .map(Move::score)
            .sum()
    }

    /// Renders the submission text: one line per car, the move count
    /// followed by the original ride indices in commitment order.
    pub fn format(&self) -> String {
        let mut out = String::new();
        for car in &self.cars {
            let _ = write!(out, "{}", car.moves().len());
            for candidate in car.moves() {
                let _ = write!(out, " {}", candidate.ride());
            }
            out.push('\n');
        }
        out
    }
}
