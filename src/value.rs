//! Type-erased original-domain values.
//!
//! [`Value`] is the type-erased representation of one element of a decoded
//! parameter tuple. Variables declare their candidate lists as `Value`s and
//! [`decode`](crate::variable::Var::decode) hands `Value`s back, so a single
//! [`Space`](crate::Space) can mix categorical, integer, and float variables
//! in one tuple.
//!
//! Payloads with no meaningful value equality (closures, handles, whole
//! configuration objects) are carried by [`Value::Opaque`], which compares
//! and hashes by the identity of its shared allocation. Clones of one
//! `Value::Opaque` are equal to each other; two independently constructed
//! payloads are not, even if their contents match.

use core::any::Any;
use std::sync::Arc;

/// A type-erased original-domain value.
///
/// The primitive variants compare by value. [`Opaque`](Value::Opaque)
/// compares by identity (shared allocation), which is what makes arbitrary
/// user payloads usable as [`ChoiceVar`](crate::variable::ChoiceVar)
/// candidates: the value decoded out of the space is a clone of the declared
/// candidate and therefore equal to it.
///
/// # Display
///
/// Primitives print their inner value; opaque payloads print
/// `opaque(<address>)`.
#[derive(Clone)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// An integer value (from [`RandintVar`](crate::variable::RandintVar) or
    /// [`QrandintVar`](crate::variable::QrandintVar)).
    Int(i64),
    /// A floating-point value (from [`UniformVar`](crate::variable::UniformVar)
    /// or [`QuniformVar`](crate::variable::QuniformVar)).
    Float(f64),
    /// A string value.
    Str(String),
    /// An arbitrary shared payload, compared by identity.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wraps an arbitrary payload as an identity-compared value.
    ///
    /// ```
    /// use mixspace::Value;
    ///
    /// let item = Value::opaque(vec![1_u8, 2, 3]);
    /// let clone = item.clone();
    /// assert_eq!(item, clone);
    /// assert_ne!(item, Value::opaque(vec![1_u8, 2, 3]));
    /// ```
    #[must_use]
    pub fn opaque<T: Any + Send + Sync>(payload: T) -> Self {
        Self::Opaque(Arc::new(payload))
    }

    /// Returns the inner boolean, or `None` for any other variant.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner integer, or `None` for any other variant.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner float, or `None` for any other variant.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner string slice, or `None` for any other variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Downcasts an opaque payload to a concrete type.
    ///
    /// Returns `None` for non-opaque variants and for mismatched types.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(payload) => payload.downcast_ref(),
            _ => None,
        }
    }

    /// Address of the shared allocation backing an opaque payload.
    pub(crate) fn opaque_addr(payload: &Arc<dyn Any + Send + Sync>) -> usize {
        Arc::as_ptr(payload) as *const () as usize
    }
}

impl PartialEq for Value {
    // Exact float equality is intended: looked-up values are clones of
    // declared candidates or outputs of the same decode arithmetic.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl core::fmt::Debug for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Opaque(v) => f
                .debug_tuple("Opaque")
                .field(&format_args!("{:#x}", Self::opaque_addr(v)))
                .finish(),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
            Self::Opaque(v) => write!(f, "opaque({:#x})", Self::opaque_addr(v)),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
