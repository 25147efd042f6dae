use std::sync::atomic::{AtomicBool, Ordering};

use jiff::Timestamp;

use crate::problem::{City, Ride};

/// Shared read-only state for one strategy run.
///
/// `rides` is the instance's pool sorted ascending by window start (stable,
/// so ties keep input order). The ride pool and the plan it feeds are owned
/// by a single solve; nothing here outlives the call.
pub struct AssignContext<'a> {
    pub city: &'a City,
    pub rides: &'a [Ride],
    pub thread_pool: &'a rayon::ThreadPool,
    pub deadline: Option<Timestamp>,
    pub is_stopped: &'a AtomicBool,
}

impl AssignContext<'_> {
    /// True once the caller asked to stop or the wall-clock budget ran
    /// out. Strategies check this between commits and return the plan
    /// built so far.
    pub fn should_stop(&self) -> bool {
        self.is_stopped.load(Ordering::Relaxed)
            || self
                .deadline
                .is_some_and(|deadline| Timestamp::now() >= deadline)
    }
}
