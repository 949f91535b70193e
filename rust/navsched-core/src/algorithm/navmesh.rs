use tracing::debug;

use super::route_cache::{quantize, RouteCache};
use super::PathAlgorithm;
use crate::errors::NavError;
use crate::models::{Point3, RouteResult};
use crate::query::NavigationQuery;

pub const DEFAULT_SNAP_TOLERANCE: f32 = 1.0;
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// NavMesh-backed route computation.
///
/// Snaps both endpoints onto the navigable surface within a tolerance
/// radius, then delegates to the backing `NavigationQuery`. A path is only
/// usable if it is complete: partial paths from the backend are reported as
/// failures, never as short successful routes. Off-mesh endpoints fold into
/// the same failure; callers cannot distinguish "off-mesh" from "no path
/// exists".
pub struct NavMeshAlgorithm<Q> {
    query: Q,
    tolerance: f32,
    cache: RouteCache,
}

impl<Q: NavigationQuery> NavMeshAlgorithm<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            tolerance: DEFAULT_SNAP_TOLERANCE,
            cache: RouteCache::new(DEFAULT_CACHE_CAPACITY),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = RouteCache::new(capacity);
        self
    }
}

impl<Q: NavigationQuery> PathAlgorithm for NavMeshAlgorithm<Q> {
    fn compute_route(&mut self, start: Point3, target: Point3) -> Result<RouteResult, NavError> {
        let Some(start) = self.query.sample(start, self.tolerance) else {
            debug!(?start, "start point off the navigable surface");
            return Ok(RouteResult::failure());
        };
        let Some(target) = self.query.sample(target, self.tolerance) else {
            debug!(?target, "target point off the navigable surface");
            return Ok(RouteResult::failure());
        };

        // Trivial route: both endpoints snap into the same cell. Successful
        // by policy, with the snapped point as the single waypoint.
        if quantize(start) == quantize(target) {
            return Ok(RouteResult::found(vec![start]));
        }

        if let Some(waypoints) = self.cache.get(start, target) {
            return Ok(RouteResult::found(waypoints.clone()));
        }

        let path = self.query.calculate_path(start, target);
        if !path.complete {
            debug!(?start, ?target, corners = path.corners.len(), "incomplete path, reporting failure");
            return Ok(RouteResult::failure());
        }

        self.cache.insert(start, target, path.corners.clone());
        Ok(RouteResult::found(path.corners))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::models::NavPath;

    /// Flat square surface at y=0 spanning [0, 10] on x and z.
    struct FlatSquare {
        path_calls: Cell<usize>,
        complete: bool,
    }

    impl FlatSquare {
        fn new() -> Self {
            Self { path_calls: Cell::new(0), complete: true }
        }

        fn contains(&self, p: Point3) -> bool {
            (0.0..=10.0).contains(&p.x) && (0.0..=10.0).contains(&p.z)
        }
    }

    impl NavigationQuery for FlatSquare {
        fn sample(&self, point: Point3, tolerance: f32) -> Option<Point3> {
            if self.contains(point) && point.y.abs() <= tolerance {
                Some(Point3::new(point.x, 0.0, point.z))
            } else {
                None
            }
        }

        fn calculate_path(&self, from: Point3, to: Point3) -> NavPath {
            self.path_calls.set(self.path_calls.get() + 1);
            if self.complete {
                NavPath::complete(vec![from, to])
            } else {
                NavPath { corners: vec![from], complete: false }
            }
        }
    }

    #[test]
    fn routes_between_on_surface_points() {
        let mut algo = NavMeshAlgorithm::new(FlatSquare::new());
        let r = algo
            .compute_route(Point3::new(1.0, 0.2, 1.0), Point3::new(9.0, -0.2, 9.0))
            .unwrap();
        assert!(r.success());
        // Endpoints are snapped down onto the surface.
        assert_eq!(r.waypoints().first().unwrap().y, 0.0);
        assert_eq!(r.waypoints().last().unwrap().y, 0.0);
    }

    #[test]
    fn off_surface_start_fails() {
        let mut algo = NavMeshAlgorithm::new(FlatSquare::new());
        let r = algo
            .compute_route(Point3::new(-5.0, 0.0, 1.0), Point3::new(9.0, 0.0, 9.0))
            .unwrap();
        assert!(!r.success());
        assert!(r.waypoints().is_empty());
    }

    #[test]
    fn beyond_tolerance_fails() {
        let mut algo = NavMeshAlgorithm::new(FlatSquare::new()).with_tolerance(0.5);
        let r = algo
            .compute_route(Point3::new(1.0, 2.0, 1.0), Point3::new(9.0, 0.0, 9.0))
            .unwrap();
        assert!(!r.success());
    }

    #[test]
    fn incomplete_path_is_a_failure_with_no_waypoints() {
        let mut query = FlatSquare::new();
        query.complete = false;
        let mut algo = NavMeshAlgorithm::new(query);
        let r = algo
            .compute_route(Point3::new(1.0, 0.0, 1.0), Point3::new(9.0, 0.0, 9.0))
            .unwrap();
        assert!(!r.success());
        assert!(r.waypoints().is_empty(), "partial corners must not leak out");
    }

    #[test]
    fn same_point_is_a_trivial_success() {
        let mut algo = NavMeshAlgorithm::new(FlatSquare::new());
        let p = Point3::new(4.0, 0.0, 4.0);
        let r = algo.compute_route(p, p).unwrap();
        assert!(r.success());
        assert_eq!(r.waypoints(), &[p]);
    }

    #[test]
    fn repeated_request_hits_the_cache() {
        let mut algo = NavMeshAlgorithm::new(FlatSquare::new());
        let a = Point3::new(1.0, 0.0, 1.0);
        let b = Point3::new(9.0, 0.0, 9.0);
        let first = algo.compute_route(a, b).unwrap();
        let second = algo.compute_route(a, b).unwrap();
        assert_eq!(first, second);
        assert_eq!(algo.query.path_calls.get(), 1);
    }
}
