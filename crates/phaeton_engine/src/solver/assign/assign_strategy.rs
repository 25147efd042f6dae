use std::fmt::Display;

use serde::Serialize;

use crate::solver::plan::Plan;

use super::{
    assign_context::AssignContext, assign_rides::AssignRides, greedy_value::GreedyValue,
    round_robin::RoundRobin,
};

/// The two historical assignment behaviors, preserved side by side and
/// selected by configuration rather than collapsed into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignStrategy {
    /// Cyclic, feasibility-blind distribution of the sorted rides.
    RoundRobin,
    /// Per-round selection of the globally best-ranked (car, ride) pair.
    GreedyValue,
}

impl Serialize for AssignStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Display for AssignStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundRobin => write!(f, "RoundRobin"),
            Self::GreedyValue => write!(f, "GreedyValue"),
        }
    }
}

impl AssignRides for AssignStrategy {
    fn assign_rides(&self, plan: &mut Plan, context: &AssignContext<'_>) {
        match self {
            AssignStrategy::RoundRobin => RoundRobin.assign_rides(plan, context),
            AssignStrategy::GreedyValue => GreedyValue.assign_rides(plan, context),
        }
    }
}
