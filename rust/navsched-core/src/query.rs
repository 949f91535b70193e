use crate::models::{NavPath, Point3};

/// Boundary contract for the external route-computation backend.
///
/// The scheduler side never constructs or bakes the navigable surface; it
/// only snaps points onto it and asks it for paths. Implementations are
/// expected to answer synchronously and within a per-cycle time budget.
pub trait NavigationQuery {
    /// Snaps `point` onto the navigable surface, searching within
    /// `tolerance` units. `None` when no surface is within reach.
    fn sample(&self, point: Point3, tolerance: f32) -> Option<Point3>;

    /// Computes a path between two on-surface points. `complete` is false
    /// when the backend could only reach part of the way to `to`.
    fn calculate_path(&self, from: Point3, to: Point3) -> NavPath;
}
