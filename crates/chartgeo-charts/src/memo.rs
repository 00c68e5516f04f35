//! Bounded geometry cache keyed on the chart spec's full `Debug` rendering

use crate::{ChartGeometry, ChartSpec};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Default number of cached geometries
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Memoizes `ChartSpec::compute`.
///
/// Entries are evicted oldest-first once `capacity` is reached. The key is the
/// spec's `Debug` text rather than its JSON, since JSON writes every non-finite
/// number as `null`. Lookups compare that full text, so hash collisions never
/// return foreign geometry.
#[derive(Debug)]
pub struct GeometryCache {
    capacity: usize,
    entries: HashMap<u64, (String, Arc<ChartGeometry>)>,
    order: VecDeque<u64>,
    hits: u64,
    misses: u64,
}

impl GeometryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Cached geometry for `spec`, computing and storing it on a miss
    pub fn get_or_compute(&mut self, spec: &ChartSpec) -> Arc<ChartGeometry> {
        let key_source = format!("{spec:?}");
        let key = hash_key(&key_source);

        if let Some((source, geometry)) = self.entries.get(&key) {
            if *source == key_source {
                self.hits += 1;
                return Arc::clone(geometry);
            }
        }

        self.misses += 1;
        let geometry = Arc::new(spec.compute());
        self.insert(key, key_source, Arc::clone(&geometry));
        geometry
    }

    fn insert(&mut self, key: u64, source: String, geometry: Arc<ChartGeometry>) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key, (source, geometry)).is_none() {
            self.order.push_back(key);
        }

        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    // ========================================================================
    // Stats
    // ========================================================================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

fn hash_key(source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistogramConfig, PieConfig};
    use chartgeo_core::DataPoint;

    fn pie(value: f64) -> ChartSpec {
        ChartSpec::Pie {
            data: vec![DataPoint::new("a", value), DataPoint::new("b", 1.0)],
            config: PieConfig::default(),
        }
    }

    #[test]
    fn test_hit_returns_same_geometry() {
        let mut cache = GeometryCache::default();
        let first = cache.get_or_compute(&pie(1.0));
        let second = cache.get_or_compute(&pie(1.0));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut cache = GeometryCache::new(2);
        cache.get_or_compute(&pie(1.0));
        cache.get_or_compute(&pie(2.0));
        cache.get_or_compute(&pie(3.0));
        assert_eq!(cache.len(), 2);

        cache.get_or_compute(&pie(1.0));
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn test_infinities_do_not_share_entries() {
        let mut cache = GeometryCache::default();
        let spec = |value: f64| ChartSpec::Histogram {
            values: vec![1.0, 2.0, value],
            config: HistogramConfig::default(),
        };

        let positive = cache.get_or_compute(&spec(f64::INFINITY));
        let negative = cache.get_or_compute(&spec(f64::NEG_INFINITY));

        assert!(!Arc::ptr_eq(&positive, &negative));
        assert_eq!((cache.hits(), cache.misses()), (0, 2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_capacity_never_stores() {
        let mut cache = GeometryCache::new(0);
        let geometry = cache.get_or_compute(&pie(1.0));
        assert!(cache.is_empty());
        assert_eq!(*geometry, pie(1.0).compute());
    }
}
