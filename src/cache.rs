//! Unbounded memoization of objective results.
//!
//! [`EvalCache`] is a thin wrapper around a `HashMap` behind a
//! `parking_lot::Mutex`, keyed by the decoded parameter tuple plus any extra
//! fixed arguments. Entries are never evicted or invalidated; the cache
//! lives and dies with its owning [`Objective`](crate::Objective).
//!
//! Float key elements are fingerprinted by [`f64::to_bits`], so NaN and
//! signed zero are usable keys; opaque payloads are keyed by the address of
//! their shared allocation. Two equal-by-value but distinct-identity opaque
//! payloads therefore occupy different entries — an accepted approximation,
//! since such payloads come from the same declared candidate list, where
//! identity equality coincides with intended equality.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::Result;
use crate::value::Value;

/// One element of a cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum KeyPart {
    Bool(bool),
    Int(i64),
    /// Raw bit pattern of the float.
    Float(u64),
    Str(String),
    /// Allocation address of an opaque payload.
    Id(usize),
}

impl KeyPart {
    fn of(value: &Value) -> Self {
        match value {
            Value::Bool(v) => Self::Bool(*v),
            Value::Int(v) => Self::Int(*v),
            Value::Float(v) => Self::Float(v.to_bits()),
            Value::Str(v) => Self::Str(v.clone()),
            Value::Opaque(v) => Self::Id(Value::opaque_addr(v)),
        }
    }
}

/// The full lookup key: decoded tuple plus extra fixed arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    params: Vec<KeyPart>,
    extra: Vec<KeyPart>,
}

impl CacheKey {
    pub(crate) fn new(params: &[Value], extra: &[Value]) -> Self {
        Self {
            params: params.iter().map(KeyPart::of).collect(),
            extra: extra.iter().map(KeyPart::of).collect(),
        }
    }
}

/// A snapshot of cache statistics.
///
/// Mirrors the `(hits, misses, maxsize, currsize)` shape familiar from
/// memoization tooling; `maxsize` is always `None` because the cache is
/// unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheInfo {
    /// Lookups that found a previously stored result.
    pub hits: u64,
    /// Lookups that found nothing. A failed computation still counts as a
    /// miss, even though nothing is stored for it.
    pub misses: u64,
    /// Capacity limit; always `None` (unbounded).
    pub maxsize: Option<u64>,
    /// Number of entries currently stored.
    pub currsize: u64,
}

#[derive(Default)]
struct State {
    map: HashMap<CacheKey, f64>,
    hits: u64,
    misses: u64,
}

/// Unbounded result cache owned by one [`Objective`](crate::Objective).
///
/// The lock is held only for lookup and insert, never across the
/// computation itself: with a single caller the wrapped computation runs at
/// most once per distinct key, but concurrent callers of the same adapter
/// may compute one key more than once. Callers needing the at-most-once
/// guarantee under concurrency must serialize calls externally.
#[derive(Default)]
pub(crate) struct EvalCache {
    inner: Mutex<State>,
}

impl EvalCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the stored result for `key`, or computes, stores, and
    /// returns it. A computation error propagates and nothing is stored.
    pub(crate) fn get_or_compute(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<f64>,
    ) -> Result<f64> {
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.inner.lock().map.insert(key, value);
        Ok(value)
    }

    fn lookup(&self, key: &CacheKey) -> Option<f64> {
        let mut state = self.inner.lock();
        match state.map.get(key) {
            Some(&value) => {
                state.hits += 1;
                Some(value)
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    pub(crate) fn info(&self) -> CacheInfo {
        let state = self.inner.lock();
        CacheInfo {
            hits: state.hits,
            misses: state.misses,
            maxsize: None,
            currsize: state.map.len() as u64,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_storage() {
        let cache = EvalCache::new();
        let key = CacheKey::new(&[Value::Int(3)], &[]);

        let first = cache.get_or_compute(key.clone(), || Ok(1.5)).unwrap();
        let second = cache.get_or_compute(key, || panic!("must not recompute")).unwrap();
        assert_eq!(first, 1.5);
        assert_eq!(second, 1.5);

        let info = cache.info();
        assert_eq!(info.hits, 1);
        assert_eq!(info.misses, 1);
        assert_eq!(info.maxsize, None);
        assert_eq!(info.currsize, 1);
    }

    #[test]
    fn test_float_keys_use_bit_patterns() {
        let a = CacheKey::new(&[Value::Float(0.0)], &[]);
        let b = CacheKey::new(&[Value::Float(-0.0)], &[]);
        assert_ne!(a, b, "signed zeros are distinct keys");

        let nan = CacheKey::new(&[Value::Float(f64::NAN)], &[]);
        assert_eq!(nan, nan.clone(), "a NaN key matches itself");
    }

    #[test]
    fn test_opaque_keys_by_identity() {
        let item = Value::opaque([1_u8, 2, 3]);
        let same = item.clone();
        let other = Value::opaque([1_u8, 2, 3]);

        assert_eq!(
            CacheKey::new(&[item.clone()], &[]),
            CacheKey::new(&[same], &[])
        );
        assert_ne!(CacheKey::new(&[item], &[]), CacheKey::new(&[other], &[]));
    }

    #[test]
    fn test_extra_args_distinguish_keys() {
        let params = [Value::Int(1)];
        let a = CacheKey::new(&params, &[Value::Int(10)]);
        let b = CacheKey::new(&params, &[Value::Int(20)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_failed_computation_is_not_stored() {
        let cache = EvalCache::new();
        let key = CacheKey::new(&[Value::Bool(true)], &[]);

        let err = cache.get_or_compute(key.clone(), || {
            Err(crate::Error::objective("boom"))
        });
        assert!(err.is_err());
        assert_eq!(cache.info().currsize, 0);

        // The next identical call re-attempts the computation.
        let ok = cache.get_or_compute(key, || Ok(2.0)).unwrap();
        assert_eq!(ok, 2.0);
        assert_eq!(cache.info().misses, 2);
        assert_eq!(cache.info().hits, 0);
    }
}
