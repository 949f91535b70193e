use thiserror::Error;

/// Errors surfaced to callers at submission time.
///
/// Resolution-time outcomes ("no route", backend faults) never appear here;
/// they always arrive through the request's callback as a failed
/// `RouteResult`.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("request queue full: {pending} pending (max {max})")]
    QueueFull { pending: usize, max: usize },
}
