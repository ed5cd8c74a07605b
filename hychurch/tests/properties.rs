use hychurch::logic::pair;
use hychurch::prelude::*;
use hychurch::probe::{numerals_agree, selectors_agree};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Random boolean expression, evaluated both through the encodings and natively.
fn random_expr(budget: usize, rng: &mut impl Rng) -> (AnyBool, bool) {
    if budget == 0 || rng.random_bool(0.25) {
        let b = rng.random_bool(0.5);
        return (truth(b), b);
    }

    match rng.random_range(0..=5) {
        0 => {
            let (x, bx) = random_expr(budget - 1, rng);
            (not(x).canonical(), !bx)
        }
        1 => {
            let (x, bx) = random_expr(budget - 1, rng);
            let (y, by) = random_expr(budget - 1, rng);
            (and(x, y).canonical(), bx && by)
        }
        2 => {
            let (x, bx) = random_expr(budget - 1, rng);
            let (y, by) = random_expr(budget - 1, rng);
            (or(x, y).canonical(), bx || by)
        }
        3 => {
            let (x, bx) = random_expr(budget - 1, rng);
            (pair::not(x).canonical(), !bx)
        }
        4 => {
            let (x, bx) = random_expr(budget - 1, rng);
            let (y, by) = random_expr(budget - 1, rng);
            (pair::and(x, y).canonical(), bx && by)
        }
        _ => {
            let (x, bx) = random_expr(budget - 1, rng);
            let (y, by) = random_expr(budget - 1, rng);
            (pair::or(x, y).canonical(), bx || by)
        }
    }
}

#[test]
fn random_expressions_match_native_booleans() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    for _ in 0..256 {
        let (encoded, native) = random_expr(6, &mut rng);
        assert_eq!(encoded.to_bool(), native);
    }
}

#[test]
fn random_counts_round_trip_through_successor() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x1337);
    for _ in 0..64 {
        let n = rng.random_range(0..200u64);
        let encoded = numeral(n);
        assert_eq!(encoded.to_int(), n);
        assert_eq!(succ(&encoded).to_int(), n + 1);
        assert_eq!(is_zero(&encoded).to_bool(), n == 0);
    }
}

#[test]
fn is_zero_is_structural_up_to_ten() {
    let mut n = zero().erase();
    assert!(is_zero(&n).to_bool());
    for count in 1..=10 {
        n = n.succ();
        assert!(!is_zero(&n).to_bool(), "ISZERO {count}");
        assert!(selectors_agree(&is_zero(&n), &False));
    }
}

#[test]
fn successor_chains_agree_with_direct_construction() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..32 {
        let n = rng.random_range(0..64u64);
        let stepped = (0..n).fold(zero().erase(), |acc, _| succ(acc).erase());
        assert!(numerals_agree(&stepped, &numeral(n)));
    }
}
