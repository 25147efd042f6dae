use jiff::SignedDuration;
use serde::Serialize;

use super::assign::assign_strategy::AssignStrategy;

#[derive(Clone, Debug, Serialize)]
pub struct SolverParams {
    pub strategy: AssignStrategy,

    /// Worker count for the read-only candidate scan. Commits are always
    /// serial, so the plan is identical for any thread count.
    pub evaluation_threads: Threads,

    /// Optional wall-clock budget for the whole solve. When it runs out
    /// the strategy stops starting new rounds and the plan committed so
    /// far is returned as a partial result.
    pub deadline: Option<SignedDuration>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            strategy: AssignStrategy::GreedyValue,
            evaluation_threads: Threads::Single,
            deadline: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => *num,
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}
