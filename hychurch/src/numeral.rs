//! Church numerals: a count is the number of times a step function gets applied.
//!
//! Role
//! - [`Numeral`] is the curried function `λf.λx. f (f (... x))`. The count is never stored; it
//!   only shows up as the number of calls made to `f`.
//! - [`Zero`], [`One`], [`Two`] and [`Three`] spell out their compositions explicitly.
//!   [`Succ`] turns any numeral `n` into `λf.λx. f (n f x)`.
//! - [`AnyNumeral`] erases the static type so counts chosen at runtime can be built by repeated
//!   successor.
//! - [`IsZero`] recovers a selector from a numeral: `n (λ_. False) True`.
//!
//! Example
//! ```
//! use hychurch::numeral::*;
//!
//! assert_eq!(Two.iterate(|s: String| s + "!", String::from("hi")), "hi!!");
//! assert_eq!(Three.successor().to_int(), 4);
//! assert_eq!(AnyNumeral::from_count(7).to_int(), 7);
//! ```
use std::{cell::Cell, fmt, sync::Arc};

use either::Either;
use log::trace;

use crate::selector::{AnyBool, False, Selector, True, selector_sealed};

pub(crate) mod numeral_sealed {
    pub trait Sealed {}
}

/// Trait implemented by every count-shaped encoding of this crate.
///
/// Role
/// - [`iterate`] is the pair view `n(f, x)`, [`apply`] the curried view `n(f)(x)`.
/// - The domain `X` of the step function is chosen per call; a numeral does not know what it
///   counts.
///
/// Performance
/// - Applying a numeral for `n` costs exactly `n` calls to `f`.
///
/// [`iterate`]: Numeral::iterate
/// [`apply`]: Numeral::apply
pub trait Numeral: Sized + numeral_sealed::Sealed {
    /// Apply `f` to `x` as many times as this numeral counts.
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X;

    /// Curried application: fix the step function and wait for the base.
    #[inline]
    fn apply<X, F: Fn(X) -> X>(&self, f: F) -> impl Fn(X) -> X {
        move |x| self.iterate(&f, x)
    }

    /// Recover an ordinary count by applying the numeral to `(incr, 0)`.
    #[inline]
    fn to_int(&self) -> u64 {
        self.iterate(incr, 0)
    }

    /// The numeral one greater: `SUCC self`.
    #[inline]
    fn successor(self) -> Succ<Self> {
        Succ { inner: self }
    }

    /// The zero test: `ISZERO self`.
    #[inline]
    fn is_zero(self) -> IsZero<Self> {
        IsZero { inner: self }
    }

    /// Forget the static type of this numeral.
    #[inline]
    fn erase(self) -> AnyNumeral
    where
        Self: Send + Sync + 'static,
    {
        AnyNumeral::erase(self)
    }
}

/// The step used to read a numeral back as a count.
#[inline]
pub fn incr(x: u64) -> u64 {
    x + 1
}

/// The step of the zero test: discard the accumulated value and answer `False`.
#[inline]
pub fn always_false<X>(_: X) -> AnyBool {
    Either::Right(False)
}

/// `λf.λx.x`
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

/// `λf.λx.f x`
#[derive(Debug, Clone, Copy, Default)]
pub struct One;

/// `λf.λx.f (f x)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Two;

/// `λf.λx.f (f (f x))`
#[derive(Debug, Clone, Copy, Default)]
pub struct Three;

impl numeral_sealed::Sealed for Zero {}

impl Numeral for Zero {
    #[inline]
    fn iterate<X>(&self, _f: impl Fn(X) -> X, x: X) -> X {
        x
    }
}

impl numeral_sealed::Sealed for One {}

impl Numeral for One {
    #[inline]
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X {
        f(x)
    }
}

impl numeral_sealed::Sealed for Two {}

impl Numeral for Two {
    #[inline]
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X {
        f(f(x))
    }
}

impl numeral_sealed::Sealed for Three {}

impl Numeral for Three {
    #[inline]
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X {
        f(f(f(x)))
    }
}

/// `SUCC n = λf.λx. f (n f x)`
#[derive(Debug, Clone, Copy)]
pub struct Succ<N> {
    pub inner: N,
}

impl<N: Numeral> numeral_sealed::Sealed for Succ<N> {}

impl<N: Numeral> Numeral for Succ<N> {
    #[inline]
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X {
        let inner = self.inner.iterate(&f, x);
        f(inner)
    }
}

impl<N: Numeral> numeral_sealed::Sealed for &N {}

impl<N: Numeral> Numeral for &N {
    #[inline]
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X {
        (**self).iterate(f, x)
    }
}

/// A numeral whose count is only known at runtime.
///
/// Two parts, both applied on every call: an optional erased numeral, fired first, and a flat run
/// of successor steps stacked on top of it. Successors extend the run instead of wrapping the
/// body, so building, applying and dropping a numeral never recurse once per unit of its count.
/// Cloning shares the body.
#[derive(Clone)]
pub struct AnyNumeral {
    body: Option<Arc<dyn Fn(&dyn Fn()) + Send + Sync>>,
    succs: u64,
}

impl AnyNumeral {
    /// The numeral that never fires its step.
    pub fn zero() -> Self {
        Self {
            body: None,
            succs: 0,
        }
    }

    /// `SUCC self`, erased.
    pub fn succ(&self) -> Self {
        Self {
            body: self.body.clone(),
            succs: self.succs + 1,
        }
    }

    /// The numeral reached from zero by `count` applications of [`AnyNumeral::succ`].
    pub fn from_count(count: u64) -> Self {
        trace!("Building runtime numeral by {count} successor applications.");
        Self {
            body: None,
            succs: count,
        }
    }

    /// Erase a statically typed numeral.
    pub fn erase<N: Numeral + Send + Sync + 'static>(numeral: N) -> Self {
        Self {
            body: Some(Arc::new(move |step: &dyn Fn()| {
                numeral.iterate(|()| step(), ())
            })),
            succs: 0,
        }
    }
}

impl Default for AnyNumeral {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for AnyNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyNumeral").finish_non_exhaustive()
    }
}

impl numeral_sealed::Sealed for AnyNumeral {}

impl Numeral for AnyNumeral {
    fn iterate<X>(&self, f: impl Fn(X) -> X, x: X) -> X {
        // The body only ever fires the step, so its firings can be tallied and replayed in order.
        let fired = Cell::new(0u64);
        if let Some(body) = &self.body {
            body(&|| fired.set(fired.get() + 1));
        }
        (0..fired.get() + self.succs).fold(x, |x, _| f(x))
    }

    #[inline]
    fn erase(self) -> AnyNumeral
    where
        Self: Send + Sync + 'static,
    {
        self
    }
}

/// `ISZERO n = n (λ_. False) True`
///
/// A selector: it behaves like [`True`] for zero and like [`False`] for every other count. The
/// step discards its input, so any number of applications past the first still yields `False`.
#[derive(Debug, Clone, Copy)]
pub struct IsZero<N> {
    pub inner: N,
}

impl<N: Numeral> selector_sealed::Sealed for IsZero<N> {}

impl<N: Numeral> Selector for IsZero<N> {
    #[inline]
    fn select<A>(&self, a: A, b: A) -> A {
        let chosen: AnyBool = self.inner.iterate(always_false, Either::Left(True));
        chosen.select(a, b)
    }
}

define_ops_selector! { IsZero<N: Numeral> }
