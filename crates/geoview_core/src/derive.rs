//! Derivation and caching
//!
//! [`derive`] runs the three engines over one set of parameters. Because
//! every engine is a pure function of the parameters, results can be shared
//! freely; [`DerivationCache`] memoizes them behind `Arc`.
//!
//! # Example
//!
//! ```ignore
//! let mut cache = DerivationCache::new();
//! let shape = cache.get_or_derive(&ShapeParams::cone(2.0, 5.0));
//! println!("{}", shape.metrics.volume);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::error::ShapeError;
use crate::geometry::{generate_solid, SolidGeometry};
use crate::kind::ShapeKind;
use crate::metrics::{compute_metrics, Metrics};
use crate::net::{compute_net, NetLayout};
use crate::params::ShapeParams;

/// Everything computed from one set of parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedShape {
    pub params: ShapeParams,
    pub geometry: SolidGeometry,
    pub metrics: Metrics,
    /// `Err(NetUndefined)` for kinds without an unfolding
    pub net: Result<NetLayout, ShapeError>,
}

/// Run the metrics, geometry and net engines for `params`
pub fn derive(params: &ShapeParams) -> DerivedShape {
    DerivedShape {
        params: *params,
        geometry: generate_solid(params),
        metrics: compute_metrics(params),
        net: compute_net(params),
    }
}

/// Hashable identity of a parameter set
///
/// Floats are compared by bit pattern, so `0.1 + 0.2` and `0.3` are
/// different keys. Segment counts take part because they change the mesh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    kind: ShapeKind,
    dimensions: Vec<u64>,
    segments: Vec<u32>,
}

impl ShapeKey {
    pub fn new(params: &ShapeParams) -> Self {
        Self {
            kind: params.kind(),
            dimensions: params.dimensions().iter().map(|d| d.value.to_bits()).collect(),
            segments: params.segments().iter().map(|(_, n)| *n).collect(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
}

impl From<&ShapeParams> for ShapeKey {
    fn from(params: &ShapeParams) -> Self {
        Self::new(params)
    }
}

/// Memo table of derived shapes
///
/// Owned by the caller; there is no internal locking. A cache made with
/// [`DerivationCache::new`] is unbounded and only shrinks through
/// [`gc`](DerivationCache::gc) or [`clear`](DerivationCache::clear).
/// Long-lived callers should use [`DerivationCache::with_capacity`], which
/// evicts the oldest entry first.
#[derive(Debug, Default)]
pub struct DerivationCache {
    entries: HashMap<ShapeKey, Arc<DerivedShape>>,
    /// Keys in insertion order
    order: VecDeque<ShapeKey>,
    capacity: Option<usize>,
    hits: u64,
    misses: u64,
}

impl DerivationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` entries (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Return the cached derivation or compute and store it
    pub fn get_or_derive(&mut self, params: &ShapeParams) -> Arc<DerivedShape> {
        let key = ShapeKey::new(params);
        if let Some(shape) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(shape);
        }
        self.misses += 1;
        log::debug!("Deriving {} (cache miss #{})", key.kind(), self.misses);
        let shape = Arc::new(derive(params));
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                log::debug!("Evicted {} from derivation cache", oldest.kind());
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, Arc::clone(&shape));
        shape
    }

    /// Look up without deriving
    pub fn get(&self, params: &ShapeParams) -> Option<Arc<DerivedShape>> {
        self.entries.get(&ShapeKey::new(params)).cloned()
    }

    pub fn contains(&self, params: &ShapeParams) -> bool {
        self.entries.contains_key(&ShapeKey::new(params))
    }

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

    /// Remove entries no caller still holds.
    ///
    /// Returns the number of entries that were removed.
    pub fn gc(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, shape| Arc::strong_count(shape) > 1);
        let entries = &self.entries;
        self.order.retain(|key| entries.contains_key(key));
        before - self.entries.len()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_runs_all_engines() {
        let shape = derive(&ShapeParams::cube(2.0));
        assert_eq!(shape.geometry.kind, ShapeKind::Cube);
        assert!((shape.metrics.volume - 8.0).abs() < 1e-12);
        assert!(shape.net.is_ok());
    }

    #[test]
    fn test_tesseract_has_no_net() {
        let shape = derive(&ShapeParams::tesseract(3.0));
        assert_eq!(shape.net, Err(ShapeError::NetUndefined(ShapeKind::Tesseract)));
        assert_eq!(shape.geometry.edge_count(), 32);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let params = ShapeParams::sphere(2.5);
        assert_eq!(derive(&params), derive(&params));
    }

    #[test]
    fn test_cache_hits_and_misses() {
        let mut cache = DerivationCache::new();
        let params = ShapeParams::cylinder(2.0, 4.0);

        let first = cache.get_or_derive(&params);
        let second = cache.get_or_derive(&params);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_segments_are_part_of_the_key() {
        let mut cache = DerivationCache::new();
        let coarse = ShapeParams::cylinder(2.0, 4.0).with_segments(8, 0);
        let fine = ShapeParams::cylinder(2.0, 4.0).with_segments(64, 0);
        cache.get_or_derive(&coarse);
        assert!(!cache.contains(&fine));
        cache.get_or_derive(&fine);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_same_dimensions_different_kind() {
        assert_ne!(
            ShapeKey::new(&ShapeParams::cube(3.0)),
            ShapeKey::new(&ShapeParams::tesseract(3.0))
        );
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut cache = DerivationCache::with_capacity(2);
        let a = ShapeParams::cube(1.0);
        let b = ShapeParams::cube(2.0);
        let c = ShapeParams::cube(3.0);
        cache.get_or_derive(&a);
        cache.get_or_derive(&b);
        cache.get_or_derive(&c);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&a));
        assert!(cache.contains(&b) && cache.contains(&c));

        // A hit does not grow the table
        cache.get_or_derive(&c);
        assert_eq!((cache.len(), cache.hits()), (2, 1));
        assert_eq!(DerivationCache::new().capacity(), None);
        assert_eq!(DerivationCache::with_capacity(0).capacity(), Some(1));
    }

    #[test]
    fn test_gc_keeps_shapes_still_in_use() {
        let mut cache = DerivationCache::new();
        let held = cache.get_or_derive(&ShapeParams::sphere(1.0));
        cache.get_or_derive(&ShapeParams::sphere(2.0));
        assert_eq!(cache.gc(), 1);
        assert!(cache.contains(&ShapeParams::sphere(1.0)));
        drop(held);
        assert_eq!(cache.gc(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cache = DerivationCache::new();
        cache.get_or_derive(&ShapeParams::cone(1.0, 2.0));
        cache.get_or_derive(&ShapeParams::cone(1.0, 2.0));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!((cache.hits(), cache.misses()), (0, 0));
        assert!(cache.get(&ShapeParams::cone(1.0, 2.0)).is_none());
    }
}
