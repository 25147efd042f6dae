pub mod assign;
pub mod evaluate;
pub mod plan;
#[allow(clippy::module_inception)]
pub mod solver;
pub mod solver_params;

pub use assign::assign_strategy::AssignStrategy;
pub use evaluate::{Move, evaluate};
pub use plan::{Car, CarIdx, Plan};
pub use solver::{Solver, SolverStatus};
pub use solver_params::{SolverParams, Threads};

use crate::problem::{City, Ride};

/// One-shot convenience entry point: solve an instance with the given
/// strategy and default parameters.
pub fn solve(city: City, rides: Vec<Ride>, strategy: AssignStrategy) -> Plan {
    Solver::new(
        city,
        rides,
        SolverParams {
            strategy,
            ..SolverParams::default()
        },
    )
    .solve()
}
