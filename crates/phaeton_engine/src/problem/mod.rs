pub mod city;
pub mod ride;

pub use city::City;
pub use ride::{Ride, RideIdx, manhattan};
