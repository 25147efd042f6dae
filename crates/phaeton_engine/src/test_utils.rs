use crate::problem::{City, Ride, RideIdx};

/// The reference city used across unit tests: 3x4 grid, 2 cars, 3 rides,
/// bonus 2, 10 steps.
pub fn test_city() -> City {
    City::new(3, 4, 2, 3, 2, 10)
}

pub fn test_ride(
    index: usize,
    pickup: (u64, u64),
    dropoff: (u64, u64),
    start: u64,
    end: u64,
) -> Ride {
    Ride::new(
        RideIdx::new(index),
        pickup.0,
        pickup.1,
        dropoff.0,
        dropoff.1,
        start,
        end,
    )
}
