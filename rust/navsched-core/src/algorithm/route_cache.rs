//! LRU cache of recently computed routes.
//!
//! Keys are endpoint pairs quantized to millimetres so that float jitter in
//! resubmitted coordinates still hits the cache. Only successful routes are
//! stored; failures are cheap to recompute and may become stale sooner.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::models::Point3;

/// One millimetre in world units.
const QUANTUM: f32 = 1000.0;

pub type CellKey = (i64, i64, i64);

/// Quantizes a point to its millimetre cell.
pub fn quantize(p: Point3) -> CellKey {
    (
        (p.x * QUANTUM).round() as i64,
        (p.y * QUANTUM).round() as i64,
        (p.z * QUANTUM).round() as i64,
    )
}

pub struct RouteCache {
    inner: LruCache<(CellKey, CellKey), Vec<Point3>>,
}

impl RouteCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self { inner: LruCache::new(capacity) }
    }

    pub fn get(&mut self, start: Point3, target: Point3) -> Option<&Vec<Point3>> {
        self.inner.get(&(quantize(start), quantize(target)))
    }

    pub fn insert(&mut self, start: Point3, target: Point3, waypoints: Vec<Point3>) {
        self.inner.put((quantize(start), quantize(target)), waypoints);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_tolerates_sub_millimetre_jitter() {
        let mut cache = RouteCache::new(4);
        let a = Point3::new(1.0, 0.0, 2.0);
        let b = Point3::new(5.0, 0.0, 5.0);
        cache.insert(a, b, vec![a, b]);

        let jittered = Point3::new(1.0001, 0.0, 2.0);
        assert!(cache.get(jittered, b).is_some());
    }

    #[test]
    fn miss_on_different_endpoints() {
        let mut cache = RouteCache::new(4);
        let a = Point3::new(1.0, 0.0, 2.0);
        let b = Point3::new(5.0, 0.0, 5.0);
        cache.insert(a, b, vec![a, b]);

        assert!(cache.get(b, a).is_none());
        assert!(cache.get(a, Point3::new(5.1, 0.0, 5.0)).is_none());
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = RouteCache::new(2);
        let p = |x: f32| Point3::new(x, 0.0, 0.0);
        cache.insert(p(0.0), p(1.0), vec![p(0.0), p(1.0)]);
        cache.insert(p(0.0), p(2.0), vec![p(0.0), p(2.0)]);
        // Touch the first entry, then insert a third; the second goes.
        assert!(cache.get(p(0.0), p(1.0)).is_some());
        cache.insert(p(0.0), p(3.0), vec![p(0.0), p(3.0)]);
        assert!(cache.get(p(0.0), p(1.0)).is_some());
        assert!(cache.get(p(0.0), p(2.0)).is_none());
        assert_eq!(cache.len(), 2);
    }
}
