pub mod assign_context;
pub mod assign_rides;
pub mod assign_strategy;
pub mod greedy_value;
pub mod round_robin;
