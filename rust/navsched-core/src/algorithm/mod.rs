pub mod navmesh;
pub mod route_cache;

pub use navmesh::NavMeshAlgorithm;

use crate::errors::NavError;
use crate::models::{Point3, RouteResult};

/// One concrete way of computing a route, hidden behind a single operation
/// so the scheduler is agnostic to the backend.
///
/// `compute_route` must be synchronous and bounded: implementations doing
/// expensive search have to cap their own effort so a call fits inside one
/// scheduler cycle. `Err` signals an internal backend fault, not "no route";
/// the latter is `Ok(RouteResult::failure())`.
pub trait PathAlgorithm {
    fn compute_route(&mut self, start: Point3, target: Point3) -> Result<RouteResult, NavError>;
}
