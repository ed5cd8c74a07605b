//! Boolean algebra over the pair view of selectors.
//!
//! `T(x, y) = x` and `F(x, y) = y` are the same selectors as [`True`](crate::selector::True) and
//! [`False`](crate::selector::False), used through [`Selector::select`] with both arguments at
//! once:
//!
//! - `NOT x   = x(F, T)`
//! - `AND x y = x(y, F)`
//! - `OR x y  = x(T, y)`
//!
//! The combinators are distinct types from [`crate::logic`] but observably identical to them.
use either::Either;

use crate::selector::{Selector, selector_sealed};
pub use crate::selector::{False as F, True as T};

/// `NOT x`, pair formulation.
#[derive(Debug, Clone, Copy)]
pub struct Not<X> {
    pub inner: X,
}

impl<X: Selector> selector_sealed::Sealed for Not<X> {}

impl<X: Selector> Selector for Not<X> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        self.inner
            .select(Either::Left(F), Either::Right(T))
            .select(a, b)
    }
}

define_ops_selector! { Not<X: Selector> }

/// `AND lhs rhs`, pair formulation.
#[derive(Debug, Clone, Copy)]
pub struct And<X, Y> {
    pub lhs: X,
    pub rhs: Y,
}

impl<X: Selector, Y: Selector> selector_sealed::Sealed for And<X, Y> {}

impl<X: Selector, Y: Selector> Selector for And<X, Y> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        self.lhs
            .select(Either::Left(&self.rhs), Either::Right(F))
            .select(a, b)
    }
}

define_ops_selector! { And<X: Selector, Y: Selector> }

/// `OR lhs rhs`, pair formulation.
#[derive(Debug, Clone, Copy)]
pub struct Or<X, Y> {
    pub lhs: X,
    pub rhs: Y,
}

impl<X: Selector, Y: Selector> selector_sealed::Sealed for Or<X, Y> {}

impl<X: Selector, Y: Selector> Selector for Or<X, Y> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        self.lhs
            .select(Either::Left(T), Either::Right(&self.rhs))
            .select(a, b)
    }
}

define_ops_selector! { Or<X: Selector, Y: Selector> }

#[inline]
pub fn not<X: Selector>(inner: X) -> Not<X> {
    Not { inner }
}

#[inline]
pub fn and<X: Selector, Y: Selector>(lhs: X, rhs: Y) -> And<X, Y> {
    And { lhs, rhs }
}

#[inline]
pub fn or<X: Selector, Y: Selector>(lhs: X, rhs: Y) -> Or<X, Y> {
    Or { lhs, rhs }
}
