#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Adapter between continuous numerical optimizers and objective functions
//! defined over mixed discrete/continuous parameter spaces. Declare each
//! parameter's original domain once; the crate encodes the whole space into
//! a flat, box-bounded real vector for the optimizer, decodes every probe
//! back into original-domain values, and memoizes results so an expensive
//! objective is never evaluated twice for the same decoded configuration.
//!
//! # Getting Started
//!
//! ```
//! use mixspace::prelude::*;
//!
//! let objective = Objective::new(
//!     |params: &[Value], _extra: &[Value]| {
//!         let x = params[0].as_float().unwrap();
//!         let n = params[1].as_int().unwrap();
//!         Ok((x - 0.3).powi(2) + n as f64)
//!     },
//!     vec![
//!         UniformVar::new(-1.0, 1.0)?.into(),
//!         RandintVar::new(0, 5)?.into(),
//!     ],
//! );
//!
//! // The optimizer sees only flat vectors and these box bounds:
//! assert_eq!(objective.bounds().len(), 2);
//! assert_eq!(objective.call(&[0.3, 0.2], &[])?, 0.0);
//! assert_eq!(
//!     objective.decode(&[0.3, 0.2])?,
//!     vec![Value::from(0.3), Value::from(0)],
//! );
//! # Ok::<(), mixspace::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Value`] | Type-erased original-domain value carried through decode, the objective, and the cache. |
//! | [`Var`] | One variable's codec: domain ⇄ a fixed-width window of bounded continuous dimensions. |
//! | [`Space`] | An ordered list of variables composed against one flat vector, with concatenated bounds. |
//! | [`Objective`] | The callable surface handed to the optimizer: decode, memoize, forward misses. |
//! | [`CacheInfo`] | Read-only snapshot of the adapter's hit/miss/size counters. |
//!
//! # Variables
//!
//! | Variable | Domain | Encoded as |
//! |----------|--------|------------|
//! | [`ChoiceVar`] | one of n arbitrary items (nominal) | n one-hot dimensions in `(0.0, 1.0)` |
//! | [`GridVar`] | one of n ordered values (ordinal) | 1 dimension over the index band |
//! | [`RandintVar`] | integer in `[lower, upper]` | 1 dimension, half-step padded |
//! | [`QrandintVar`] | `lower + k*q`, up to `upper` | 1 dimension, half-`q` padded |
//! | [`UniformVar`] | float in `[lower, upper]` | 1 dimension, exact bounds |
//! | [`QuniformVar`] | `lower + k*q`, up to `upper` | 1 dimension, half-`q` padded |
//!
//! Decoding is the only place rounding, quantization, or argmax selection
//! happens, and `decode(encode(v)) == v` holds for every declared domain
//! value `v`.
//!
//! # Evaluation model
//!
//! One adapter instance serves one optimization run on one logical thread:
//! the optimizer issues an evaluation, receives a scalar, and issues the
//! next. Calls take `&self` (the cache uses interior mutability), but the
//! at-most-once-per-key guarantee assumes the single-threaded driving
//! model — see [`Objective::call`]. Constraints are the caller's
//! responsibility (e.g. return a sentinel penalty value); independent worker
//! processes each construct their own adapter.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at adapter construction and on cache misses | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod cache;
mod error;
mod objective;
mod space;
mod value;
pub mod variable;

pub use cache::CacheInfo;
pub use error::{Error, Result};
pub use objective::Objective;
pub use space::Space;
pub use value::Value;
pub use variable::{
    Bound, ChoiceVar, GridVar, QrandintVar, QuniformVar, RandintVar, UniformVar, Var,
};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use mixspace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cache::CacheInfo;
    pub use crate::error::{Error, Result};
    pub use crate::objective::Objective;
    pub use crate::space::Space;
    pub use crate::value::Value;
    pub use crate::variable::{
        Bound, ChoiceVar, GridVar, QrandintVar, QuniformVar, RandintVar, UniformVar, Var,
    };
}
