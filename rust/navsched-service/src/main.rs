use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use navsched_core::{NavMeshAlgorithm, NavPath, NavigationQuery, Point3};
use navsched_service::{PathScheduler, SchedulerConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Flat rectangular surface at y=0; enough terrain to exercise the stack.
struct FlatSurface {
    half_extent: f32,
}

impl NavigationQuery for FlatSurface {
    fn sample(&self, point: Point3, tolerance: f32) -> Option<Point3> {
        let inside = point.x.abs() <= self.half_extent && point.z.abs() <= self.half_extent;
        if inside && point.y.abs() <= tolerance {
            Some(Point3::new(point.x, 0.0, point.z))
        } else {
            None
        }
    }

    fn calculate_path(&self, from: Point3, to: Point3) -> NavPath {
        NavPath::complete(vec![from, to])
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    // Structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = SchedulerConfig::from_env();
    let agents = env_usize("NAVSCHED_AGENTS", 12);
    let max_ticks = env_usize("NAVSCHED_TICKS", 64);

    let scheduler = PathScheduler::new(
        NavMeshAlgorithm::new(FlatSurface { half_extent: 50.0 }),
        cfg.clone(),
    );
    tracing::info!(
        core_version = %navsched_core::version(),
        requests_per_cycle = cfg.requests_per_cycle,
        agents,
        "starting navsched demo"
    );

    let delivered = Arc::new(AtomicUsize::new(0));
    for i in 0..agents {
        let x = (i % 20) as f32 * 4.0 - 38.0;
        let delivered = Arc::clone(&delivered);
        scheduler.request_path(
            Point3::new(x, 0.0, -20.0),
            Point3::new(-x, 0.0, 20.0),
            move |result| {
                tracing::info!(
                    agent = i,
                    success = result.success(),
                    waypoints = result.waypoints().len(),
                    "route delivered"
                );
                delivered.fetch_add(1, Ordering::Relaxed);
            },
        )?;
    }

    let mut ticks = 0usize;
    while delivered.load(Ordering::Relaxed) < agents && ticks < max_ticks {
        let resolved = scheduler.tick();
        ticks += 1;
        tracing::debug!(tick = ticks, resolved, pending = scheduler.pending(), "cycle complete");
    }

    let total = delivered.load(Ordering::Relaxed);
    anyhow::ensure!(total == agents, "only {total}/{agents} routes delivered after {ticks} ticks");
    tracing::info!(ticks, delivered = total, "all routes delivered");
    Ok(())
}
