//! Two-way selection, the substrate of every boolean in the crate.
//!
//! Role
//! - [`Selector`] is the curried function `λa.λb.a` or `λa.λb.b`. Applied to two arguments it
//!   hands back exactly one of them, untouched.
//! - [`True`] and [`False`] are the two primitive selectors. [`Left`] and [`Right`] are the same
//!   types under their switching names: a boolean *is* a switch.
//! - [`AnyBool`] is the dynamic sum of both primitives, used wherever a selector has to choose
//!   between two different selector types.
//!
//! Example
//! ```
//! use hychurch::selector::*;
//!
//! let (left, right): (Left, Right) = (True, False);
//! assert_eq!(left.apply("5V")("GRND"), "5V");
//! assert_eq!(right.apply("loud")("soft"), "soft");
//! assert_eq!(True.select("true", "false"), "true");
//! ```
use either::Either;

use crate::logic::{And, Not, Or};

pub(crate) mod selector_sealed {
    pub trait Sealed {}
}

/// Trait implemented by every boolean-shaped encoding of this crate.
///
/// Role
/// - [`select`] is the pair view `s(a, b)`, [`apply`] the curried view `s(a)(b)`. Both return one
///   of the two arguments and never inspect, clone or call either of them.
/// - The payload type `A` is chosen per call, so the same selector can pick between strings,
///   integers or other selectors.
/// - Builder helpers ([`negate`], [`and`], [`or`]) wrap the selector into the combinators of
///   [`crate::logic`].
///
/// The trait is sealed: only the encodings of this crate are guaranteed to honor the selection
/// contract.
///
/// [`select`]: Selector::select
/// [`apply`]: Selector::apply
/// [`negate`]: Selector::negate
/// [`and`]: Selector::and
/// [`or`]: Selector::or
pub trait Selector: Sized + selector_sealed::Sealed {
    /// Choose between `a` and `b`.
    fn select<A>(&self, a: A, b: A) -> A;

    /// Curried application: consume the first argument and wait for the second.
    #[inline]
    fn apply<A>(&self, a: A) -> impl FnOnce(A) -> A {
        move |b| self.select(a, b)
    }

    /// Recover an ordinary `bool` by applying the selector to `(true, false)`.
    #[inline]
    fn to_bool(&self) -> bool {
        self.select(true, false)
    }

    /// Recover the primitive selector this one behaves like.
    #[inline]
    fn canonical(&self) -> AnyBool {
        self.select(Either::Left(True), Either::Right(False))
    }

    /// Logical negation: `NOT self`.
    #[inline]
    fn negate(self) -> Not<Self> {
        Not { inner: self }
    }

    /// Logical conjunction: `AND self other`.
    #[inline]
    fn and<Q: Selector>(self, other: Q) -> And<Self, Q> {
        And {
            lhs: self,
            rhs: other,
        }
    }

    /// Logical disjunction: `OR self other`.
    #[inline]
    fn or<Q: Selector>(self, other: Q) -> Or<Self, Q> {
        Or {
            lhs: self,
            rhs: other,
        }
    }
}

/// `λa.λb.a`, also known as [`Left`].
#[derive(Debug, Clone, Copy, Default)]
pub struct True;

/// `λa.λb.b`, also known as [`Right`].
#[derive(Debug, Clone, Copy, Default)]
pub struct False;

/// The switch that routes current to its first argument.
pub type Left = True;

/// The switch that routes current to its second argument.
pub type Right = False;

/// Either primitive selector, known only at runtime.
pub type AnyBool = Either<True, False>;

impl selector_sealed::Sealed for True {}

impl Selector for True {
    #[inline]
    fn select<A>(&self, a: A, _b: A) -> A {
        a
    }
}

define_ops_selector! { True }

impl selector_sealed::Sealed for False {}

impl Selector for False {
    #[inline]
    fn select<A>(&self, _a: A, b: A) -> A {
        b
    }
}

define_ops_selector! { False }

impl<T: Selector> selector_sealed::Sealed for &T {}

impl<T: Selector> Selector for &T {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        (**self).select(a, b)
    }
}

impl<L: Selector, R: Selector> selector_sealed::Sealed for Either<L, R> {}

impl<L: Selector, R: Selector> Selector for Either<L, R> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        match self {
            Either::Left(l) => l.select(a, b),
            Either::Right(r) => r.select(a, b),
        }
    }
}

/// Lift an ordinary `bool` into its primitive selector.
#[inline]
pub fn truth(value: bool) -> AnyBool {
    if value {
        Either::Left(True)
    } else {
        Either::Right(False)
    }
}
