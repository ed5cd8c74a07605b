//! Free-function builders.
//!
//! Each function is a thin wrapper over a constructor or a trait helper, for call sites that read
//! better in prefix form: `and(True, not(False))` rather than `True.and(False.negate())`.
use crate::{
    logic::{And, Not, Or},
    numeral::{AnyNumeral, IsZero, Numeral, Succ, Zero},
    selector::{AnyBool, False, Left, Right, Selector, True},
};

/// The switch that keeps its first argument.
#[inline]
pub fn left() -> Left {
    True
}

/// The switch that keeps its second argument.
#[inline]
pub fn right() -> Right {
    False
}

/// Lift a `bool` into the encoding.
#[inline]
pub fn truth(value: bool) -> AnyBool {
    crate::selector::truth(value)
}

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

#[inline]
pub fn zero() -> Zero {
    Zero
}

#[inline]
pub fn succ<N: Numeral>(inner: N) -> Succ<N> {
    Succ { inner }
}

/// The numeral for `count`, built at runtime.
#[inline]
pub fn numeral(count: u64) -> AnyNumeral {
    AnyNumeral::from_count(count)
}

#[inline]
pub fn is_zero<N: Numeral>(inner: N) -> IsZero<N> {
    IsZero { inner }
}

#[inline]
pub fn to_bool<S: Selector>(selector: &S) -> bool {
    selector.to_bool()
}

#[inline]
pub fn to_int<N: Numeral>(numeral: &N) -> u64 {
    numeral.to_int()
}
