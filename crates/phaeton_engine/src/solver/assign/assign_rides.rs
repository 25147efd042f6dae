use crate::solver::plan::Plan;

use super::assign_context::AssignContext;

/// An assignment strategy consumes the sorted ride pool and commits moves
/// to the plan's cars. Implementations decide feasibility handling and
/// ordering; they never touch ride identity.
pub trait AssignRides {
    fn assign_rides(&self, plan: &mut Plan, context: &AssignContext<'_>);
}
