//! Error types for the mixspace crate.
//!
//! All fallible operations in the crate return [`Result<T>`], which is an
//! alias for `core::result::Result<T, Error>`. The [`Error`] enum covers
//! three groups:
//!
//! - **Validation** — raised at variable-construction time for malformed
//!   ranges, non-positive steps, or empty candidate lists. Never deferred to
//!   encode/decode time.
//! - **Shape/usage** — raised when a vector or tuple presented to
//!   encode/decode does not match the expected width, or when a value to
//!   encode is not part of the variable's declared domain. Fatal per call;
//!   signals caller/optimizer misuse.
//! - **Objective passthrough** — an error raised by the wrapped objective
//!   function. Propagated unmodified (transparent `Display` and `source`),
//!   never cached, never retried.

/// Errors returned by mixspace operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lower bound exceeds the upper bound in a
    /// [`RandintVar`](crate::variable::RandintVar),
    /// [`QrandintVar`](crate::variable::QrandintVar),
    /// [`UniformVar`](crate::variable::UniformVar), or
    /// [`QuniformVar`](crate::variable::QuniformVar).
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// The step size provided to a quantized variable is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// A [`ChoiceVar`](crate::variable::ChoiceVar) or
    /// [`GridVar`](crate::variable::GridVar) was created with an empty
    /// candidate vector.
    #[error("candidate choices cannot be empty")]
    EmptyChoices,

    /// An encoded vector (or one variable's window of it) has a different
    /// width than the variable or space expects. Vectors are never silently
    /// truncated or padded.
    #[error("dimension mismatch: expected {expected} encoded dimensions but got {got}")]
    DimensionMismatch {
        /// The expected number of dimensions.
        expected: usize,
        /// The actual number of dimensions supplied.
        got: usize,
    },

    /// A tuple of original-domain values has a different length than the
    /// number of declared variables.
    #[error("value count mismatch: expected {expected} values but got {got}")]
    ValueCountMismatch {
        /// The number of declared variables.
        expected: usize,
        /// The actual number of values supplied.
        got: usize,
    },

    /// A value passed to `encode` is not among the variable's declared
    /// candidates.
    #[error("value is not among the variable's declared candidates")]
    UnknownValue,

    /// A numeric value passed to `encode` is outside the variable's declared
    /// domain (out of range, or not on the quantization step).
    #[error("value {value} is outside the variable's declared domain")]
    OutOfDomain {
        /// The offending value.
        value: f64,
    },

    /// The wrapped objective function failed. The source error is carried
    /// unmodified; nothing is cached for the attempted key.
    #[error(transparent)]
    Objective(Box<dyn core::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a foreign error as an objective failure.
    ///
    /// Use this inside an objective closure to surface domain errors through
    /// [`Objective::call`](crate::Objective::call) without losing them:
    ///
    /// ```
    /// use mixspace::{Error, Result};
    ///
    /// fn evaluate() -> Result<f64> {
    ///     "not a number".parse::<f64>().map_err(Error::objective)
    /// }
    /// assert!(evaluate().is_err());
    /// ```
    pub fn objective<E>(source: E) -> Self
    where
        E: Into<Box<dyn core::error::Error + Send + Sync>>,
    {
        Self::Objective(source.into())
    }
}

/// A convenience alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
