use std::thread;

use hychurch::numeral::{always_false, incr};
use hychurch::prelude::*;
use hychurch::probe::{numerals_agree, numerals_agree_on};

#[test]
fn explicit_numerals_count_applications() {
    assert_eq!(Zero.iterate(incr, 0), 0);
    assert_eq!(One.iterate(incr, 0), 1);
    assert_eq!(Two.iterate(incr, 0), 2);
    assert_eq!(Three.iterate(incr, 0), 3);
}

#[test]
fn successor_adds_one_for_runtime_counts() {
    for n in 0..=10 {
        assert_eq!(to_int(&succ(numeral(n))), n + 1);
        assert_eq!(numeral(n).succ().to_int(), n + 1);
    }
}

#[test]
fn successor_of_zero_behaves_like_one() {
    let one = succ(zero());
    assert!(numerals_agree(&one, &One));
    assert!(numerals_agree_on(&one, &One, |s: String| s + "|", String::new()));
    assert!(numerals_agree_on(&one, &One, |x: i64| x * 3 - 1, 5));
    assert!(numerals_agree_on(&one, &One, |v: Vec<u8>| [v, vec![0]].concat(), vec![]));
}

#[test]
fn successor_is_domain_agnostic() {
    let four = succ(Three);
    assert_eq!(four.iterate(|s: String| s + "ab", String::new()), "abababab");
    assert_eq!(four.iterate(|x: f64| x / 2.0, 16.0), 1.0);
    assert!(four.iterate(|b: bool| !b, true));
}

#[test]
fn static_and_runtime_numerals_agree() {
    assert!(numerals_agree(&Three, &numeral(3)));
    assert!(numerals_agree(&succ(succ(Two)), &numeral(4)));
    assert!(numerals_agree(&Two.erase(), &numeral(2)));
    assert!(!numerals_agree(&Two, &numeral(3)));
}

#[test]
fn scenario_counts() {
    assert_eq!(to_int(&numeral(2)), 2);
    assert_eq!(to_int(&succ(numeral(2))), 3);
    assert_eq!(to_int(&succ(One)), 2);
    assert_eq!(to_int(&succ(Three)), 4);
}

#[test]
fn is_zero_only_for_zero() {
    assert!(to_bool(&is_zero(zero())));
    assert!(to_bool(&is_zero(numeral(0))));
    for n in 1..=10 {
        assert!(!to_bool(&is_zero(numeral(n))), "ISZERO {n}");
    }
    assert!(!to_bool(&is_zero(One)));
    assert!(!to_bool(&is_zero(Two)));
    assert!(!to_bool(&is_zero(Three)));
}

#[test]
fn is_zero_result_is_a_selector() {
    assert_eq!(is_zero(Zero).select("arg1", "arg2"), "arg1");
    assert_eq!(is_zero(Two).apply("arg1")("arg2"), "arg2");
    assert!(to_bool(&not(is_zero(Three))));
    assert!(to_bool(&and(is_zero(Zero), not(is_zero(One)))));
}

#[test]
fn always_false_absorbs_any_input() {
    assert!(!always_false(truth(true)).to_bool());
    assert!(!always_false(42).to_bool());
    // Repeated application stays false no matter how many steps run.
    for n in 1..=10 {
        let chosen: AnyBool = numeral(n).iterate(always_false, truth(true));
        assert!(chosen.is_right());
    }
}

#[test]
fn application_is_pure() {
    let n = numeral(5);
    assert_eq!(n.to_int(), n.to_int());
    assert_eq!(n.iterate(|x: u64| x * 2, 1), 32);
    assert_eq!(n.iterate(|x: u64| x * 2, 1), 32);
}

#[test]
fn runtime_numerals_are_shareable_across_threads() {
    let n = numeral(6);
    thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|k| {
                let n = &n;
                s.spawn(move || n.iterate(|x: u64| x + k, 0))
            })
            .collect();
        for (k, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), 6 * k as u64);
        }
    });
}

#[test]
fn large_runtime_numerals_build_apply_and_drop() {
    let n = numeral(1_000_000);
    assert_eq!(to_int(&n), 1_000_000);
    assert_eq!(to_int(&succ(&n)), 1_000_001);
    assert!(!to_bool(&is_zero(&n)));
    drop(n);

    drop(numeral(20_000));
}

#[test]
fn long_successor_chains_stay_flat() {
    let n = (0..200_000).fold(zero().erase(), |n, _| n.succ());
    assert_eq!(n.to_int(), 200_000);
    assert_eq!(n.iterate(|x: u64| x + 2, 1), 400_001);
    assert!(numerals_agree(&n, &numeral(200_000)));
    drop(n);
}
