//! Behavioral equality.
//!
//! Encodings have no state to compare. Two selectors are equal when they pick the same side of
//! the same probe pair; two numerals are equal when they send the same probe base to the same
//! result under the same step.
use crate::{numeral::Numeral, selector::Selector};

/// Whether `p` and `q` choose the same side.
#[inline]
pub fn selectors_agree<P: Selector, Q: Selector>(p: &P, q: &Q) -> bool {
    selectors_agree_on(p, q, 0u8, 1u8)
}

/// Whether `p` and `q` return the same payload when applied to `(a, b)`.
///
/// With `a == b` every pair of selectors agrees, so callers should pick distinct probes.
pub fn selectors_agree_on<P, Q, A>(p: &P, q: &Q, a: A, b: A) -> bool
where
    P: Selector,
    Q: Selector,
    A: PartialEq + Clone,
{
    p.select(a.clone(), b.clone()) == q.select(a, b)
}

/// Whether `m` and `n` count the same number of steps.
#[inline]
pub fn numerals_agree<M: Numeral, N: Numeral>(m: &M, n: &N) -> bool {
    numerals_agree_on(m, n, |k: u64| k + 1, 0)
}

/// Whether `m` and `n` map `x` to the same result under the step `f`.
pub fn numerals_agree_on<M, N, X>(m: &M, n: &N, f: impl Fn(X) -> X, x: X) -> bool
where
    M: Numeral,
    N: Numeral,
    X: PartialEq + Clone,
{
    m.iterate(&f, x.clone()) == n.iterate(&f, x)
}
