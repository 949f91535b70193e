use std::sync::{Arc, Mutex};

use navsched_core::{PathAlgorithm, Point3, RouteResult};
use tracing::{debug, warn};

use crate::config::SchedulerConfig;
use crate::errors::SchedulerError;
use crate::queue::RequestQueue;

pub type RouteCallback = Box<dyn FnOnce(RouteResult) + Send>;

/// One submitted navigation request. Immutable once enqueued; consumed
/// exactly once when the scheduler resolves it.
pub struct PathRequest {
    pub start: Point3,
    pub target: Point3,
    on_complete: RouteCallback,
}

impl PathRequest {
    pub fn new(
        start: Point3,
        target: Point3,
        on_complete: impl FnOnce(RouteResult) + Send + 'static,
    ) -> Self {
        Self {
            start,
            target,
            on_complete: Box::new(on_complete),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CycleState {
    Idle,
    Processing,
}

struct SchedulerInner {
    queue: RequestQueue<PathRequest>,
    state: CycleState,
    requests_per_cycle: u32,
}

/// The sole entry point for requesting paths.
///
/// Cloneable handle; hand a clone to every caller that needs routes instead
/// of reaching for a global. The queue and cycle state sit behind one lock,
/// the boxed algorithm behind another, so route computation and callback
/// delivery run with the queue unlocked and `request_path` stays callable
/// from inside a callback.
#[derive(Clone)]
pub struct PathScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    algorithm: Arc<Mutex<Box<dyn PathAlgorithm + Send>>>,
}

impl PathScheduler {
    pub fn new(algorithm: impl PathAlgorithm + Send + 'static, config: SchedulerConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                queue: RequestQueue::new(config.max_pending),
                state: CycleState::Idle,
                requests_per_cycle: config.requests_per_cycle,
            })),
            algorithm: Arc::new(Mutex::new(Box::new(algorithm))),
        }
    }

    /// Enqueues a request. Never blocks and never invokes `on_complete`
    /// synchronously: delivery always happens on a later `tick`, even when
    /// the queue is empty at submission time. Fails fast with `QueueFull`
    /// when a depth cap is configured and exceeded.
    pub fn request_path(
        &self,
        start: Point3,
        target: Point3,
        on_complete: impl FnOnce(RouteResult) + Send + 'static,
    ) -> Result<(), SchedulerError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.queue.enqueue(PathRequest::new(start, target, on_complete)) {
            Ok(()) => {
                debug!(pending = inner.queue.len(), "path request enqueued");
                Ok(())
            }
            Err(_rejected) => {
                let pending = inner.queue.len();
                let max = inner.queue.max_pending().unwrap_or(pending);
                warn!(pending, max, "path request rejected, queue full");
                Err(SchedulerError::QueueFull { pending, max })
            }
        }
    }

    /// Runs one processing cycle and returns the number of requests
    /// resolved. Driven by the host's main loop, once per cycle; the
    /// scheduler performs no self-scheduling.
    ///
    /// Resolves at most `requests_per_cycle` requests (0 drains the queue),
    /// strictly oldest-first. Only requests already pending when the tick
    /// began are eligible, so a callback that resubmits waits for the next
    /// cycle and an unbounded drain always terminates. At most one
    /// computation is in flight at a time; a reentrant `tick` while one is
    /// running resolves nothing.
    pub fn tick(&self) -> usize {
        let eligible = {
            let inner = self.inner.lock().unwrap();
            if inner.state == CycleState::Processing {
                warn!("tick while a computation is in flight, skipping");
                return 0;
            }
            let pending = inner.queue.len();
            match inner.requests_per_cycle {
                0 => pending,
                budget => pending.min(budget as usize),
            }
        };

        let mut resolved = 0;
        for _ in 0..eligible {
            let request = {
                let mut inner = self.inner.lock().unwrap();
                if inner.state == CycleState::Processing {
                    break;
                }
                match inner.queue.dequeue() {
                    Some(request) => {
                        inner.state = CycleState::Processing;
                        request
                    }
                    None => break,
                }
            };

            let result = {
                let mut algorithm = self.algorithm.lock().unwrap();
                match algorithm.compute_route(request.start, request.target) {
                    Ok(result) => result,
                    Err(e) => {
                        // The caller still gets its one callback.
                        warn!(error = %e, "route computation failed, delivering failure");
                        RouteResult::failure()
                    }
                }
            };

            // Queue and algorithm are both unlocked here: the callback may
            // submit new requests without deadlocking.
            (request.on_complete)(result);

            self.inner.lock().unwrap().state = CycleState::Idle;
            resolved += 1;
        }

        if resolved > 0 {
            debug!(resolved, pending = self.pending(), "tick resolved requests");
        }
        resolved
    }

    /// Current queue depth.
    pub fn pending(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }
}
