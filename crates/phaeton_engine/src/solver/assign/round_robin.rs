use crate::solver::{
    evaluate::evaluate,
    plan::{CarIdx, Plan},
};

use super::{assign_context::AssignContext, assign_rides::AssignRides};

/// Cyclic distribution: ride `i` of the sorted pool goes to car
/// `i % cars`, evaluated against that car's state at commit time.
///
/// Deliberately feasibility-blind: the move is committed even when it
/// scores zero, and cars keep receiving rides past the simulation
/// horizon. O(R).
#[derive(Debug, Default)]
pub struct RoundRobin;

impl AssignRides for RoundRobin {
    fn assign_rides(&self, plan: &mut Plan, context: &AssignContext<'_>) {
        let car_count = plan.cars().len();
        if car_count == 0 {
            return;
        }

        for (i, ride) in context.rides.iter().enumerate() {
            // The only cancellation point this strategy has is between
            // two assignments.
            if context.should_stop() {
                tracing::debug!("round-robin stopped with {} rides unassigned", context.rides.len() - i);
                break;
            }

            let car = CarIdx::new(i % car_count);
            let candidate = evaluate(context.city, plan.car(car), ride);
            plan.commit(car, candidate);
        }
    }
}
