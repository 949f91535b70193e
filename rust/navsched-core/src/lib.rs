pub mod algorithm;
pub mod errors;
pub mod models;
pub mod query;

pub use algorithm::{NavMeshAlgorithm, PathAlgorithm};
pub use errors::NavError;
pub use models::{NavPath, Point3, RouteResult};
pub use query::NavigationQuery;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
