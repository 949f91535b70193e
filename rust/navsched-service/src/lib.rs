pub mod config;
pub mod errors;
pub mod queue;
pub mod scheduler;

pub use config::SchedulerConfig;
pub use errors::SchedulerError;
pub use scheduler::{PathRequest, PathScheduler, RouteCallback};
