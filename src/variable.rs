//! Variable codecs — the search-space building blocks.
//!
//! Each variable maps one original-domain value to a fixed-width window of
//! bounded continuous dimensions and back. A continuous optimizer only ever
//! sees the windows and their bounds; [`decode`](Var::decode) is the single
//! place where rounding, quantization, or argmax selection happens, so
//! `decode(encode(v)) == v` for every `v` in a variable's declared domain.
//!
//! | Variable | Domain | Width | Bounds |
//! |----------|--------|-------|--------|
//! | [`ChoiceVar`] | one of n arbitrary items (nominal) | n | `(0.0, 1.0)` per dimension |
//! | [`GridVar`] | one of n ordered values (ordinal) | 1 | `(-0.5, n-0.5)` pulled in one ulp |
//! | [`RandintVar`] | integer in `[lower, upper]` | 1 | `(lower-0.5, upper+0.5)` pulled in one ulp |
//! | [`QrandintVar`] | `lower + k*q <= upper` (integers) | 1 | `(lower-q/2, last+q/2)` pulled in one ulp |
//! | [`UniformVar`] | float in `[lower, upper]` | 1 | `(lower, upper)` exactly |
//! | [`QuniformVar`] | `lower + k*q <= upper` (floats) | 1 | `(lower-q/2, last+q/2)` pulled in one ulp |
//!
//! Discrete bounds extend half a step beyond the extreme levels so that a
//! uniformly sampled continuous value lands in a roughly equal-width band
//! for every level, including the two boundary ones. The half-step ends are
//! then pulled inward by one ulp ([`f64::next_up`]/[`f64::next_down`]) so a
//! decoded boundary value stays inside the domain without relying on the
//! clamp.
//!
//! Exact half-way values round away from zero ([`f64::round`] semantics),
//! uniformly across all quantized variables.
//!
//! # Example
//!
//! ```
//! use mixspace::variable::{ChoiceVar, RandintVar, Var};
//! use mixspace::Value;
//!
//! let color = ChoiceVar::new(vec!["red".into(), "green".into(), "blue".into()])?;
//! assert_eq!(color.encode(&"green".into())?, vec![0.0, 1.0, 0.0]);
//! assert_eq!(color.decode(&[0.2, 0.9, 0.4])?, Value::from("green"));
//!
//! let workers = RandintVar::new(1, 8)?;
//! assert_eq!(workers.decode(&[3.6])?, 4);
//! # Ok::<(), mixspace::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::value::Value;

/// The closed interval one continuous dimension may range over, as presented
/// to the optimizer.
pub type Bound = (f64, f64);

/// Fails with [`Error::DimensionMismatch`] unless `encoded` has the expected
/// width.
fn expect_len(encoded: &[f64], expected: usize) -> Result<()> {
    if encoded.len() == expected {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected,
            got: encoded.len(),
        })
    }
}

/// A categorical variable over arbitrary, possibly-duplicated items.
///
/// Encoded one-hot: one `(0.0, 1.0)` dimension per item, with the chosen
/// item's dimension at `1.0`. Decoding selects the item at the
/// maximum-valued dimension; ties break toward the lowest index, and on
/// duplicated items `encode` matches the first equal item.
///
/// Items are compared by equality only — they never need an ordering. Use
/// [`Value::opaque`] for payloads with no value equality (handles,
/// closures); they match by identity.
///
/// # Examples
///
/// ```
/// use mixspace::variable::ChoiceVar;
/// use mixspace::Value;
///
/// let activation = ChoiceVar::new(vec!["relu".into(), "tanh".into()])?;
/// assert_eq!(activation.encoded_len(), 2);
/// assert_eq!(activation.decode(&[0.5, 0.5])?, Value::from("relu"));
/// # Ok::<(), mixspace::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChoiceVar {
    items: Vec<Value>,
}

impl ChoiceVar {
    /// Creates a categorical variable over `items`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChoices`] if `items` is empty.
    pub fn new(items: Vec<Value>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyChoices);
        }
        Ok(Self { items })
    }

    /// The declared items, in order.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of continuous dimensions consumed: one per item.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.items.len()
    }

    /// `(0.0, 1.0)` for every dimension.
    #[must_use]
    pub fn bounds(&self) -> Vec<Bound> {
        vec![(0.0, 1.0); self.items.len()]
    }

    /// One-hot encodes a declared item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] if `value` equals no declared item.
    pub fn encode(&self, value: &Value) -> Result<Vec<f64>> {
        let hot = self
            .items
            .iter()
            .position(|item| item == value)
            .ok_or(Error::UnknownValue)?;
        Ok((0..self.items.len())
            .map(|i| if i == hot { 1.0 } else { 0.0 })
            .collect())
    }

    /// Decodes to the item at the maximum-valued dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    pub fn decode(&self, encoded: &[f64]) -> Result<Value> {
        expect_len(encoded, self.items.len())?;
        // Strict > keeps the lowest index on ties.
        let mut hot = 0;
        for (i, &x) in encoded.iter().enumerate().skip(1) {
            if x > encoded[hot] {
                hot = i;
            }
        }
        Ok(self.items[hot].clone())
    }
}

/// An ordinal variable over a pre-ordered list of values.
///
/// Unlike [`ChoiceVar`], the position of a value in the list is meaningful:
/// the single encoded dimension ranges over the positional indices, so an
/// optimizer can exploit the ordering. The values themselves only need
/// equality — `["good", "better", "best"]` works as given, without the
/// values being comparable.
#[derive(Clone, Debug)]
pub struct GridVar {
    values: Vec<Value>,
    index: RandintVar,
}

impl GridVar {
    /// Creates an ordinal variable over `values`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChoices`] if `values` is empty.
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(values: Vec<Value>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyChoices);
        }
        let index = RandintVar::new(0, values.len() as i64 - 1)?;
        Ok(Self { values, index })
    }

    /// The declared values, in order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of continuous dimensions consumed: always one.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1
    }

    /// The bounds of the internal index variable.
    #[must_use]
    pub fn bounds(&self) -> Vec<Bound> {
        self.index.bounds()
    }

    /// Encodes a declared value as its positional index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] if `value` equals no declared value.
    #[allow(clippy::cast_possible_wrap)]
    pub fn encode(&self, value: &Value) -> Result<Vec<f64>> {
        let position = self
            .values
            .iter()
            .position(|v| v == value)
            .ok_or(Error::UnknownValue)?;
        self.index.encode(position as i64)
    }

    /// Decodes to the value at the rounded, clamped index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn decode(&self, encoded: &[f64]) -> Result<Value> {
        let index = self.index.decode(encoded)? as usize;
        Ok(self.values[index].clone())
    }
}

/// A uniform integer variable over `[lower, upper]`, both inclusive.
///
/// # Examples
///
/// ```
/// use mixspace::variable::RandintVar;
///
/// let var = RandintVar::new(0, 6)?;
/// let (low, high) = var.bounds()[0];
/// assert!((low - -0.5).abs() < 1e-9 && (high - 6.5).abs() < 1e-9);
/// assert_eq!(var.decode(&[3.4])?, 3);
/// assert_eq!(var.decode(&[6.9])?, 6);
/// # Ok::<(), mixspace::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RandintVar {
    lower: i64,
    upper: i64,
}

impl RandintVar {
    /// Creates an integer variable over `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        if lower > upper {
            return Err(Error::InvalidBounds {
                low: lower as f64,
                high: upper as f64,
            });
        }
        Ok(Self { lower, upper })
    }

    /// The inclusive lower end of the domain.
    #[must_use]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// The inclusive upper end of the domain.
    #[must_use]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Number of continuous dimensions consumed: always one.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1
    }

    /// `(lower - 0.5, upper + 0.5)`, pulled in one ulp at each end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bounds(&self) -> Vec<Bound> {
        vec![(
            (self.lower as f64 - 0.5).next_up(),
            (self.upper as f64 + 0.5).next_down(),
        )]
    }

    /// Identity-encodes a domain integer as a single float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if `value` is outside `[lower, upper]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn encode(&self, value: i64) -> Result<Vec<f64>> {
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::OutOfDomain {
                value: value as f64,
            });
        }
        Ok(vec![value as f64])
    }

    /// Rounds to the nearest integer (ties away from zero) and clamps to
    /// `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn decode(&self, encoded: &[f64]) -> Result<i64> {
        expect_len(encoded, 1)?;
        Ok(encoded[0]
            .round()
            .clamp(self.lower as f64, self.upper as f64) as i64)
    }
}

/// A quantized integer variable: `lower + k*q` for `k >= 0`, not exceeding
/// `upper`.
///
/// The sequence is anchored at `lower`, so `QrandintVar::new(1, 10, 2)`
/// covers `{1, 3, 5, 7, 9}`. A step larger than the range collapses the
/// domain to `{lower}`.
#[derive(Clone, Debug)]
pub struct QrandintVar {
    lower: i64,
    upper: i64,
    q: i64,
}

impl QrandintVar {
    /// Creates a quantized integer variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper` and
    /// [`Error::InvalidStep`] if `q <= 0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(lower: i64, upper: i64, q: i64) -> Result<Self> {
        if lower > upper {
            return Err(Error::InvalidBounds {
                low: lower as f64,
                high: upper as f64,
            });
        }
        if q <= 0 {
            return Err(Error::InvalidStep);
        }
        Ok(Self { lower, upper, q })
    }

    /// The quantization step.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.q
    }

    /// Number of steps above `lower` in the domain.
    fn max_steps(&self) -> i64 {
        (self.upper - self.lower) / self.q
    }

    /// The largest valid domain value.
    #[must_use]
    pub fn last_valid(&self) -> i64 {
        self.lower + self.max_steps() * self.q
    }

    /// Number of continuous dimensions consumed: always one.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1
    }

    /// `(lower - q/2, last_valid + q/2)`, pulled in one ulp at each end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bounds(&self) -> Vec<Bound> {
        let half = self.q as f64 / 2.0;
        vec![(
            (self.lower as f64 - half).next_up(),
            (self.last_valid() as f64 + half).next_down(),
        )]
    }

    /// Identity-encodes a domain integer as a single float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if `value` is out of range or not on
    /// the step sequence.
    #[allow(clippy::cast_precision_loss)]
    pub fn encode(&self, value: i64) -> Result<Vec<f64>> {
        if !(self.lower..=self.upper).contains(&value) || (value - self.lower) % self.q != 0 {
            return Err(Error::OutOfDomain {
                value: value as f64,
            });
        }
        Ok(vec![value as f64])
    }

    /// Rounds to the nearest valid step from `lower` (ties away from zero)
    /// and clamps into the domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn decode(&self, encoded: &[f64]) -> Result<i64> {
        expect_len(encoded, 1)?;
        let k = ((encoded[0] - self.lower as f64) / self.q as f64)
            .round()
            .clamp(0.0, self.max_steps() as f64) as i64;
        Ok(self.lower + k * self.q)
    }
}

/// A uniform float variable over `[lower, upper]`.
///
/// The only variable whose bounds are the domain itself and whose decode is
/// the identity — no rounding happens anywhere.
#[derive(Clone, Debug)]
pub struct UniformVar {
    lower: f64,
    upper: f64,
}

impl UniformVar {
    /// Creates a uniform float variable over `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper` or either bound
    /// is NaN.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower > upper || lower.is_nan() || upper.is_nan() {
            return Err(Error::InvalidBounds {
                low: lower,
                high: upper,
            });
        }
        Ok(Self { lower, upper })
    }

    /// The inclusive lower end of the domain.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The inclusive upper end of the domain.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of continuous dimensions consumed: always one.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1
    }

    /// `(lower, upper)` exactly.
    #[must_use]
    pub fn bounds(&self) -> Vec<Bound> {
        vec![(self.lower, self.upper)]
    }

    /// Identity-encodes a domain float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if `value` is outside `[lower, upper]`.
    pub fn encode(&self, value: f64) -> Result<Vec<f64>> {
        if !(self.lower..=self.upper).contains(&value) {
            return Err(Error::OutOfDomain { value });
        }
        Ok(vec![value])
    }

    /// Identity. The optimizer is trusted to respect the exact bounds it
    /// was given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    pub fn decode(&self, encoded: &[f64]) -> Result<f64> {
        expect_len(encoded, 1)?;
        Ok(encoded[0])
    }
}

/// A quantized float variable: `lower + k*q` for `k >= 0`, not exceeding
/// `upper`.
///
/// Decoded values are always computed as `lower + k*q`, so they are
/// bit-identical to domain values constructed the same way.
#[derive(Clone, Debug)]
pub struct QuniformVar {
    lower: f64,
    upper: f64,
    q: f64,
    max_steps: i64,
}

impl QuniformVar {
    /// Creates a quantized float variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper` (or either bound
    /// is NaN) and [`Error::InvalidStep`] if `q` is not a positive number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(lower: f64, upper: f64, q: f64) -> Result<Self> {
        if lower > upper || lower.is_nan() || upper.is_nan() {
            return Err(Error::InvalidBounds {
                low: lower,
                high: upper,
            });
        }
        if !(q.is_finite() && q > 0.0) {
            return Err(Error::InvalidStep);
        }
        // Float floor can undershoot when the range is an exact multiple of q.
        let mut max_steps = ((upper - lower) / q).floor();
        if lower + (max_steps + 1.0) * q <= upper {
            max_steps += 1.0;
        }
        Ok(Self {
            lower,
            upper,
            q,
            max_steps: max_steps as i64,
        })
    }

    /// The quantization step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.q
    }

    /// The largest valid domain value, `lower + max_steps * q`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn last_valid(&self) -> f64 {
        self.lower + self.max_steps as f64 * self.q
    }

    /// Number of continuous dimensions consumed: always one.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1
    }

    /// `(lower - q/2, last_valid + q/2)`, pulled in one ulp at each end.
    #[must_use]
    pub fn bounds(&self) -> Vec<Bound> {
        let half = self.q / 2.0;
        vec![(
            (self.lower - half).next_up(),
            (self.last_valid() + half).next_down(),
        )]
    }

    /// Identity-encodes a domain float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if `value` is out of range or not
    /// exactly `lower + k*q` for some valid `k`.
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn encode(&self, value: f64) -> Result<Vec<f64>> {
        let k = ((value - self.lower) / self.q).round();
        if !(0.0..=self.max_steps as f64).contains(&k) || self.lower + k * self.q != value {
            return Err(Error::OutOfDomain { value });
        }
        Ok(vec![value])
    }

    /// Rounds to the nearest valid step from `lower` (ties away from zero)
    /// and clamps into the domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    #[allow(clippy::cast_precision_loss)]
    pub fn decode(&self, encoded: &[f64]) -> Result<f64> {
        expect_len(encoded, 1)?;
        let k = ((encoded[0] - self.lower) / self.q)
            .round()
            .clamp(0.0, self.max_steps as f64);
        Ok(self.lower + k * self.q)
    }
}

/// The closed set of variable codecs.
///
/// `Var` is what [`Space`](crate::Space) composes: every variant's
/// `encoded_len`, `bounds`, `encode`, and `decode` is dispatched by a single
/// exhaustive match, so adding behavior for all variables is a
/// compiler-checked change.
///
/// Construct a `Var` from a concrete variable via `From`:
///
/// ```
/// use mixspace::variable::{RandintVar, UniformVar, Var};
///
/// let vars: Vec<Var> = vec![
///     RandintVar::new(1, 10)?.into(),
///     UniformVar::new(0.0, 1.0)?.into(),
/// ];
/// assert_eq!(vars.iter().map(Var::encoded_len).sum::<usize>(), 2);
/// # Ok::<(), mixspace::Error>(())
/// ```
#[derive(Clone, Debug)]
pub enum Var {
    /// A categorical variable (one-hot encoded).
    Choice(ChoiceVar),
    /// An ordinal variable over a pre-ordered list.
    Grid(GridVar),
    /// A uniform integer variable.
    Randint(RandintVar),
    /// A quantized integer variable.
    Qrandint(QrandintVar),
    /// A uniform float variable.
    Uniform(UniformVar),
    /// A quantized float variable.
    Quniform(QuniformVar),
}

impl Var {
    /// Number of continuous dimensions this variable consumes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Choice(v) => v.encoded_len(),
            Self::Grid(v) => v.encoded_len(),
            Self::Randint(v) => v.encoded_len(),
            Self::Qrandint(v) => v.encoded_len(),
            Self::Uniform(v) => v.encoded_len(),
            Self::Quniform(v) => v.encoded_len(),
        }
    }

    /// The `(low, high)` pair for each of this variable's dimensions.
    #[must_use]
    pub fn bounds(&self) -> Vec<Bound> {
        match self {
            Self::Choice(v) => v.bounds(),
            Self::Grid(v) => v.bounds(),
            Self::Randint(v) => v.bounds(),
            Self::Qrandint(v) => v.bounds(),
            Self::Uniform(v) => v.bounds(),
            Self::Quniform(v) => v.bounds(),
        }
    }

    /// Encodes a domain value into this variable's window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownValue`] for a value that is not part of the
    /// declared domain (including a `Value` variant that does not match the
    /// variable's type), or [`Error::OutOfDomain`] for a matching numeric
    /// variant outside the declared range or step sequence.
    pub fn encode(&self, value: &Value) -> Result<Vec<f64>> {
        match self {
            Self::Choice(v) => v.encode(value),
            Self::Grid(v) => v.encode(value),
            Self::Randint(v) => v.encode(value.as_int().ok_or(Error::UnknownValue)?),
            Self::Qrandint(v) => v.encode(value.as_int().ok_or(Error::UnknownValue)?),
            Self::Uniform(v) => v.encode(value.as_float().ok_or(Error::UnknownValue)?),
            Self::Quniform(v) => v.encode(value.as_float().ok_or(Error::UnknownValue)?),
        }
    }

    /// Decodes this variable's window back into a domain value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on a wrong-width window.
    pub fn decode(&self, encoded: &[f64]) -> Result<Value> {
        match self {
            Self::Choice(v) => v.decode(encoded),
            Self::Grid(v) => v.decode(encoded),
            Self::Randint(v) => v.decode(encoded).map(Value::Int),
            Self::Qrandint(v) => v.decode(encoded).map(Value::Int),
            Self::Uniform(v) => v.decode(encoded).map(Value::Float),
            Self::Quniform(v) => v.decode(encoded).map(Value::Float),
        }
    }
}

impl From<ChoiceVar> for Var {
    fn from(v: ChoiceVar) -> Self {
        Self::Choice(v)
    }
}

impl From<GridVar> for Var {
    fn from(v: GridVar) -> Self {
        Self::Grid(v)
    }
}

impl From<RandintVar> for Var {
    fn from(v: RandintVar) -> Self {
        Self::Randint(v)
    }
}

impl From<QrandintVar> for Var {
    fn from(v: QrandintVar) -> Self {
        Self::Qrandint(v)
    }
}

impl From<UniformVar> for Var {
    fn from(v: UniformVar) -> Self {
        Self::Uniform(v)
    }
}

impl From<QuniformVar> for Var {
    fn from(v: QuniformVar) -> Self {
        Self::Quniform(v)
    }
}
