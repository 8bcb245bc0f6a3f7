//! Composition of variables into one flat encoded vector.
//!
//! A [`Space`] owns an ordered list of [`Var`]s and maps whole parameter
//! tuples to/from the flat vector a continuous optimizer works with. Each
//! variable occupies a consecutive window of the vector, in declaration
//! order; the concatenated per-window bounds are computed once at
//! construction and handed to the optimizer verbatim.

use crate::error::{Error, Result};
use crate::value::Value;
use crate::variable::{Bound, Var};

/// An ordered mixed search space over a flat continuous vector.
///
/// # Examples
///
/// ```
/// use mixspace::variable::{ChoiceVar, UniformVar};
/// use mixspace::{Space, Value};
///
/// let space = Space::new(vec![
///     ChoiceVar::new(vec!["a".into(), "b".into()])?.into(),
///     UniformVar::new(-1.0, 1.0)?.into(),
/// ]);
/// assert_eq!(space.encoded_len(), 3);
/// assert_eq!(space.decoded_len(), 2);
///
/// let vector = space.encode(&[Value::from("b"), Value::from(0.25)])?;
/// assert_eq!(vector, vec![0.0, 1.0, 0.25]);
/// assert_eq!(space.decode(&vector)?, vec![Value::from("b"), Value::from(0.25)]);
/// # Ok::<(), mixspace::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Space {
    vars: Vec<Var>,
    bounds: Vec<Bound>,
}

impl Space {
    /// Creates a space over `vars`, concatenating their bounds in
    /// declaration order.
    #[must_use]
    pub fn new(vars: Vec<Var>) -> Self {
        let bounds = vars.iter().flat_map(Var::bounds).collect();
        Self { vars, bounds }
    }

    /// The declared variables, in order.
    #[must_use]
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    /// Total width of the encoded vector: the sum of every variable's
    /// `encoded_len`.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.bounds.len()
    }

    /// Length of a decoded tuple: the number of declared variables.
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        self.vars.len()
    }

    /// The `(low, high)` pair for every encoded dimension, suitable for an
    /// optimizer's box-constraint parameter.
    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Encodes a full parameter tuple into a flat vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueCountMismatch`] if `values` does not have one
    /// value per declared variable, and propagates the per-variable encode
    /// errors ([`Error::UnknownValue`], [`Error::OutOfDomain`]).
    pub fn encode(&self, values: &[Value]) -> Result<Vec<f64>> {
        if values.len() != self.vars.len() {
            return Err(Error::ValueCountMismatch {
                expected: self.vars.len(),
                got: values.len(),
            });
        }
        let mut encoded = Vec::with_capacity(self.encoded_len());
        for (var, value) in self.vars.iter().zip(values) {
            encoded.extend(var.encode(value)?);
        }
        Ok(encoded)
    }

    /// Decodes a flat vector into a full parameter tuple, slicing it into
    /// consecutive per-variable windows in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `encoded` does not have
    /// exactly [`encoded_len`](Self::encoded_len) dimensions. Never silently
    /// truncates or pads.
    pub fn decode(&self, encoded: &[f64]) -> Result<Vec<Value>> {
        if encoded.len() != self.encoded_len() {
            return Err(Error::DimensionMismatch {
                expected: self.encoded_len(),
                got: encoded.len(),
            });
        }
        let mut decoded = Vec::with_capacity(self.vars.len());
        let mut offset = 0;
        for var in &self.vars {
            let window = &encoded[offset..offset + var.encoded_len()];
            decoded.push(var.decode(window)?);
            offset += var.encoded_len();
        }
        Ok(decoded)
    }
}
