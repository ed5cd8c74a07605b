//! Untyped values: one variant per role, checked on the way out.
//!
//! Role
//! - [`Value`] can hold a selector, a numeral or a terminal payload behind a single type, for
//!   callers that cannot track roles statically (collections, the demo driver).
//! - Recovery through [`Value::to_bool`], [`Value::to_int`], [`Value::select`] and
//!   [`Value::iterate`] checks the role first and reports [`Error::ShapeMismatch`] instead of
//!   coercing.
//!
//! Example
//! ```
//! use hychurch::prelude::*;
//!
//! let values = [Value::from(True.negate()), Value::from(numeral(3)), Value::from("GRND")];
//! assert_eq!(values[0].to_bool(), Ok(false));
//! assert_eq!(values[1].to_int(), Ok(3));
//! assert!(values[2].to_bool().unwrap_err().is_shape_mismatch());
//! ```
use std::fmt;

use log::debug;
use strum::{Display, EnumDiscriminants, EnumIs, EnumTryAs};

use crate::{
    error::{Error, Result},
    numeral::{AnyNumeral, Numeral},
    selector::{AnyBool, Selector},
};

/// Concrete payload found at the base of an application chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs)]
pub enum Terminal {
    Bool(bool),
    Int(u64),
    Str(String),
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Bool(b) => write!(f, "{b}"),
            Terminal::Int(n) => write!(f, "{n}"),
            Terminal::Str(s) => f.write_str(s),
        }
    }
}

/// A value whose static role has been forgotten.
///
/// The variant records the role, nothing else: a selector is still only something that chooses,
/// a numeral still only something that counts.
#[derive(Debug, Clone, EnumIs, EnumTryAs, EnumDiscriminants)]
#[strum_discriminants(name(Shape), derive(Hash, Display))]
pub enum Value {
    /// `λa.λb.a` or `λa.λb.b`.
    Selector(AnyBool),

    /// `λf.λx. f (... x)`.
    Numeral(AnyNumeral),

    /// A plain payload, not applicable to anything.
    Terminal(Terminal),
}

impl Value {
    /// Role of this value.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.into()
    }

    /// Apply a selector to `(a, b)`.
    pub fn select(&self, a: Value, b: Value) -> Result<Value> {
        match self {
            Value::Selector(s) => Ok(s.select(a, b)),
            _ => Err(self.mismatch(Shape::Selector)),
        }
    }

    /// Apply a numeral to `(f, x)`.
    pub fn iterate(&self, f: impl Fn(Value) -> Value, x: Value) -> Result<Value> {
        match self {
            Value::Numeral(n) => Ok(n.iterate(f, x)),
            _ => Err(self.mismatch(Shape::Numeral)),
        }
    }

    /// Recover an ordinary `bool` from a selector.
    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Value::Selector(s) => Ok(s.to_bool()),
            _ => Err(self.mismatch(Shape::Selector)),
        }
    }

    /// Recover an ordinary count from a numeral.
    pub fn to_int(&self) -> Result<u64> {
        match self {
            Value::Numeral(n) => Ok(n.to_int()),
            _ => Err(self.mismatch(Shape::Numeral)),
        }
    }

    fn mismatch(&self, expected: Shape) -> Error {
        let found = self.shape();
        debug!("Rejected recovery of a {expected} from a value of shape {found}.");
        Error::ShapeMismatch { expected, found }
    }
}

impl<S: Selector> From<S> for Value {
    fn from(selector: S) -> Self {
        Value::Selector(selector.canonical())
    }
}

impl From<AnyNumeral> for Value {
    fn from(numeral: AnyNumeral) -> Self {
        Value::Numeral(numeral)
    }
}

impl From<Terminal> for Value {
    fn from(terminal: Terminal) -> Self {
        Value::Terminal(terminal)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Terminal(Terminal::Bool(b))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Terminal(Terminal::Int(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Terminal(Terminal::Str(s.to_owned()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Terminal(Terminal::Str(s))
    }
}
