use rayon::prelude::*;
use tracing::debug;

use crate::solver::{
    evaluate::{Move, evaluate},
    plan::{CarIdx, Plan},
};

use super::{assign_context::AssignContext, assign_rides::AssignRides};

/// Per-round global selection: every round scores every remaining ride
/// against every car still inside the time horizon and commits the pair
/// with the highest value (ties: earlier dropoff, then lower ride index,
/// then lower car index).
///
/// Superlinear — O(rounds x remaining rides x cars) — which is fine at
/// contest scale (thousands of rides, hundreds of cars). Larger instances
/// would want spatial or time-window pruning before the scan.
#[derive(Debug, Default)]
pub struct GreedyValue;

struct Candidate {
    car: CarIdx,
    pool_slot: usize,
    candidate: Move,
}

impl AssignRides for GreedyValue {
    fn assign_rides(&self, plan: &mut Plan, context: &AssignContext<'_>) {
        let steps = context.city.steps();
        // Positions into the sorted ride slice; removal order does not
        // matter because the candidate order is total.
        let mut pool: Vec<usize> = (0..context.rides.len()).collect();

        while !pool.is_empty() {
            if context.should_stop() {
                debug!("greedy-value stopped with {} rides unassigned", pool.len());
                break;
            }

            // The scan is read-only; evaluations fan out over the pool
            // while commits stay serial below.
            let best = context.thread_pool.install(|| {
                plan.cars()
                    .par_iter()
                    .filter(|car| !car.is_exhausted(steps))
                    .flat_map_iter(|car| {
                        pool.iter().enumerate().map(move |(pool_slot, &position)| Candidate {
                            car: car.index(),
                            pool_slot,
                            candidate: evaluate(context.city, car, &context.rides[position]),
                        })
                    })
                    .max_by(|a, b| {
                        a.candidate
                            .candidate_cmp(&b.candidate)
                            .then_with(|| b.car.cmp(&a.car))
                    })
            });

            // No candidate means every car is past the horizon.
            let Some(chosen) = best else {
                debug!("fleet exhausted with {} rides unassigned", pool.len());
                break;
            };

            plan.commit(chosen.car, chosen.candidate);
            pool.swap_remove(chosen.pool_slot);
        }
    }
}
