//! Boolean algebra, selector-driven.
//!
//! Every operator here lets a boolean choose between other booleans through the curried view
//! [`Selector::apply`]:
//!
//! - `NOT x   = x False True`
//! - `AND x y = x y x`
//! - `OR x y  = x x y`
//!
//! The chosen selector is then applied to the caller's payload. No operator ever looks at the
//! branch it did not choose. [`pair`] holds the same algebra written with the uncurried view and
//! explicit `T`/`F` constants; both formulations agree on every input.
//!
//! Example
//! ```
//! use hychurch::prelude::*;
//!
//! let x = True.and(False.negate());
//! assert!(x.to_bool());
//! assert_eq!((!x).select("yes", "no"), "no");
//! ```
pub mod pair;

use either::Either;

use crate::selector::{False, Selector, True, selector_sealed};

/// `NOT x`.
#[derive(Debug, Clone, Copy)]
pub struct Not<X> {
    pub inner: X,
}

impl<X: Selector> selector_sealed::Sealed for Not<X> {}

impl<X: Selector> Selector for Not<X> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        let chosen = self.inner.apply(Either::Left(False))(Either::Right(True));
        chosen.select(a, b)
    }
}

define_ops_selector! { Not<X: Selector> }

/// `AND lhs rhs`.
#[derive(Debug, Clone, Copy)]
pub struct And<X, Y> {
    pub lhs: X,
    pub rhs: Y,
}

impl<X: Selector, Y: Selector> selector_sealed::Sealed for And<X, Y> {}

impl<X: Selector, Y: Selector> Selector for And<X, Y> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        // A false `lhs` stands in for the result itself.
        let chosen = self.lhs.apply(Either::Left(&self.rhs))(Either::Right(&self.lhs));
        chosen.select(a, b)
    }
}

define_ops_selector! { And<X: Selector, Y: Selector> }

/// `OR lhs rhs`.
#[derive(Debug, Clone, Copy)]
pub struct Or<X, Y> {
    pub lhs: X,
    pub rhs: Y,
}

impl<X: Selector, Y: Selector> selector_sealed::Sealed for Or<X, Y> {}

impl<X: Selector, Y: Selector> Selector for Or<X, Y> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        let chosen = self.lhs.apply(Either::Left(&self.lhs))(Either::Right(&self.rhs));
        chosen.select(a, b)
    }
}

define_ops_selector! { Or<X: Selector, Y: Selector> }
