//! The wrapped objective handed to a continuous optimizer.
//!
//! [`Objective`] composes a [`Space`] with an unbounded result cache:
//! every call decodes the optimizer's flat vector, consults the cache keyed
//! by the decoded tuple plus any extra fixed arguments, and only forwards
//! misses to the user's function. The memoization is what makes repeated
//! probing of the same discrete configuration cheap — an optimizer moving
//! within one decode band re-evaluates nothing.

use crate::cache::{CacheInfo, CacheKey, EvalCache};
use crate::error::Result;
use crate::space::Space;
use crate::value::Value;
use crate::variable::{Bound, Var};

/// A user objective adapted to a flat, box-bounded continuous vector.
///
/// Construct one per optimization run. The adapter is immutable after
/// construction except for its cache, which accumulates entries over the
/// run; independent runs (e.g. one per worker process) must each construct
/// their own instance.
///
/// The user function receives the decoded parameter tuple and the extra
/// fixed arguments passed to [`call`](Self::call), and returns the scalar
/// to minimize or maximize. Errors it returns propagate unchanged and are
/// never cached.
///
/// # Examples
///
/// ```
/// use mixspace::variable::{ChoiceVar, RandintVar, UniformVar};
/// use mixspace::{Objective, Value};
///
/// let objective = Objective::new(
///     |params: &[Value], _extra: &[Value]| {
///         let sign = if params[0].as_str() == Some("neg") { -1.0 } else { 1.0 };
///         let n = params[1].as_int().unwrap() as f64;
///         let x = params[2].as_float().unwrap();
///         Ok(sign * (n + x))
///     },
///     vec![
///         ChoiceVar::new(vec!["pos".into(), "neg".into()])?.into(),
///         RandintVar::new(1, 10)?.into(),
///         UniformVar::new(0.0, 1.0)?.into(),
///     ],
/// );
///
/// // Seed the optimizer with a known good solution...
/// let guess = objective.encode(&[Value::from("neg"), Value::from(3), Value::from(0.5)])?;
/// // ...and hand `objective.bounds()` plus the call surface to it.
/// assert_eq!(objective.call(&guess, &[])?, -3.5);
/// assert_eq!(objective.cache_info().misses, 1);
/// # Ok::<(), mixspace::Error>(())
/// ```
pub struct Objective<F> {
    func: F,
    space: Space,
    cache: EvalCache,
}

impl<F> Objective<F>
where
    F: Fn(&[Value], &[Value]) -> Result<f64>,
{
    /// Wraps `func` over the given variables.
    #[must_use]
    pub fn new(func: F, vars: Vec<Var>) -> Self {
        let space = Space::new(vars);
        trace_info!(
            decoded_len = space.decoded_len(),
            encoded_len = space.encoded_len(),
            "objective adapter constructed"
        );
        Self {
            func,
            space,
            cache: EvalCache::new(),
        }
    }

    /// The owned search space.
    #[must_use]
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// The `(low, high)` pair for every encoded dimension; pass verbatim to
    /// the optimizer's box-constraint parameter.
    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        self.space.bounds()
    }

    /// Encodes a known original-domain solution, e.g. to build the
    /// optimizer's initial guess.
    ///
    /// # Errors
    ///
    /// See [`Space::encode`].
    pub fn encode(&self, values: &[Value]) -> Result<Vec<f64>> {
        self.space.encode(values)
    }

    /// Decodes an encoded vector, e.g. the optimizer's final solution.
    ///
    /// # Errors
    ///
    /// See [`Space::decode`].
    pub fn decode(&self, encoded: &[f64]) -> Result<Vec<Value>> {
        self.space.decode(encoded)
    }

    /// Evaluates the wrapped objective on an encoded vector.
    ///
    /// Decodes `encoded`, forms the cache key from the decoded tuple and
    /// `extra_args`, and returns the cached scalar or the result of invoking
    /// the user function with `(decoded, extra_args)`. This is the function
    /// surface handed to the optimizer, with `extra_args` bound however the
    /// optimizer passes fixed arguments through.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// for a wrong-width vector, and propagates any error of the user
    /// function unchanged (and uncached — an identical later call
    /// re-attempts it).
    pub fn call(&self, encoded: &[f64], extra_args: &[Value]) -> Result<f64> {
        let decoded = self.space.decode(encoded)?;
        let key = CacheKey::new(&decoded, extra_args);
        self.cache.get_or_compute(key, || {
            trace_debug!("cache miss, invoking wrapped objective");
            (self.func)(&decoded, extra_args)
        })
    }

    /// A snapshot of the cache counters: hits, misses, maxsize (always
    /// `None`), and current size.
    #[must_use]
    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }
}
