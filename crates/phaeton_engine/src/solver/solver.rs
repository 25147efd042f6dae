use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use jiff::Timestamp;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::problem::{City, Ride};

use super::{
    assign::{assign_context::AssignContext, assign_rides::AssignRides},
    plan::Plan,
    solver_params::SolverParams,
};

#[derive(Copy, Clone, Debug, Serialize)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
}

/// One solve of one instance.
///
/// Owns the ride pool for the duration of the call; no state survives
/// between solves. `stop()` may be called from another thread and turns
/// the result into a partial plan, never an error.
pub struct Solver {
    city: City,
    rides: Vec<Ride>,
    params: SolverParams,
    status: RwLock<SolverStatus>,
    is_stopped: Arc<AtomicBool>,
}

impl Solver {
    pub fn new(city: City, mut rides: Vec<Ride>, params: SolverParams) -> Self {
        // Stable, so rides sharing a start keep their input-index order.
        rides.sort_by_key(Ride::start);

        Solver {
            city,
            rides,
            params,
            status: RwLock::new(SolverStatus::Pending),
            is_stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    pub fn stop(&self) {
        self.is_stopped.store(true, Ordering::Relaxed);
    }

    pub fn solve(&self) -> Plan {
        *self.status.write() = SolverStatus::Running;

        let deadline = self
            .params
            .deadline
            .map(|budget| Timestamp::now() + budget);

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.params.evaluation_threads.number_of_threads())
            .build()
            .unwrap();

        debug!(
            "solving with {} over {} rides and {} cars",
            self.params.strategy,
            self.rides.len(),
            self.city.cars()
        );

        let mut plan = Plan::with_cars(self.city.cars());
        let context = AssignContext {
            city: &self.city,
            rides: &self.rides,
            thread_pool: &thread_pool,
            deadline,
            is_stopped: &self.is_stopped,
        };

        crate::timer_debug!(
            "assignment",
            self.params.strategy.assign_rides(&mut plan, &context)
        );

        *self.status.write() = SolverStatus::Completed;
        debug!("plan committed, total score {}", plan.total_score());

        plan
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;
    use crate::solver::AssignStrategy;
    use crate::test_utils::{test_city, test_ride};

    #[test]
    fn test_status_transitions() {
        let solver = Solver::new(test_city(), Vec::new(), SolverParams::default());
        assert!(matches!(solver.status(), SolverStatus::Pending));

        solver.solve();
        assert!(matches!(solver.status(), SolverStatus::Completed));
    }

    #[test]
    fn test_stop_returns_partial_plan() {
        let rides = vec![test_ride(0, (0, 0), (1, 1), 0, 9)];
        let solver = Solver::new(test_city(), rides, SolverParams::default());

        solver.stop();
        let plan = solver.solve();

        // Stopped before the first round: nothing committed, no error.
        assert_eq!(plan.total_score(), 0);
        assert!(plan.cars().iter().all(|car| car.moves().is_empty()));
    }

    #[test]
    fn test_expired_deadline_returns_partial_plan() {
        for strategy in [AssignStrategy::RoundRobin, AssignStrategy::GreedyValue] {
            let rides = vec![test_ride(0, (0, 0), (1, 1), 0, 9)];
            let solver = Solver::new(
                test_city(),
                rides,
                SolverParams {
                    strategy,
                    deadline: Some(SignedDuration::ZERO),
                    ..SolverParams::default()
                },
            );

            let plan = solver.solve();
            assert_eq!(plan.total_score(), 0);
            assert!(matches!(solver.status(), SolverStatus::Completed));
        }
    }

    #[test]
    fn test_multi_threaded_scan_matches_single() {
        let rides: Vec<_> = (0..12)
            .map(|i| test_ride(i, (i as u64 % 3, 0), (0, i as u64 % 4), i as u64 % 5, 40))
            .collect();

        let single = Solver::new(test_city(), rides.clone(), SolverParams::default()).solve();
        let multi = Solver::new(
            test_city(),
            rides,
            SolverParams {
                evaluation_threads: crate::solver::Threads::Multi(4),
                ..SolverParams::default()
            },
        )
        .solve();

        assert_eq!(single.format(), multi.format());
        assert_eq!(single.total_score(), multi.total_score());
    }
}
