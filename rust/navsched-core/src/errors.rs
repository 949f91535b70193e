use thiserror::Error;

/// Internal faults of a route-computation backend.
///
/// "No route exists" is not an error; it is `RouteResult::failure()` on the
/// normal result channel. `NavError` is reserved for the backend itself
/// misbehaving, and the scheduler normalizes it into a failed result before
/// delivery so callers always see exactly one callback.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("navigation backend failure: {0}")]
    Backend(String),
}
