use hychurch::logic::pair;
use hychurch::prelude::*;
use hychurch::probe::selectors_agree;

const TABLE: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

#[test]
fn not_truth_table() {
    assert!(!to_bool(&not(True)));
    assert!(to_bool(&not(False)));
    assert!(!to_bool(&pair::not(True)));
    assert!(to_bool(&pair::not(False)));
}

#[test]
fn and_truth_table() {
    for (x, y) in TABLE {
        assert_eq!(to_bool(&and(truth(x), truth(y))), x && y, "AND {x} {y}");
        assert_eq!(to_bool(&pair::and(truth(x), truth(y))), x && y, "PAND {x} {y}");
    }
}

#[test]
fn or_truth_table() {
    for (x, y) in TABLE {
        assert_eq!(to_bool(&or(truth(x), truth(y))), x || y, "OR {x} {y}");
        assert_eq!(to_bool(&pair::or(truth(x), truth(y))), x || y, "POR {x} {y}");
    }
}

#[test]
fn formulations_agree() {
    for x in [truth(true), truth(false)] {
        assert!(selectors_agree(&not(x), &pair::not(x)));
        for y in [truth(true), truth(false)] {
            assert!(selectors_agree(&and(x, y), &pair::and(x, y)));
            assert!(selectors_agree(&or(x, y), &pair::or(x, y)));
        }
    }
}

#[test]
fn de_morgan() {
    for (x, y) in TABLE {
        let (x, y) = (truth(x), truth(y));
        assert!(selectors_agree(&not(and(x, y)), &or(not(x), not(y))));
        assert!(selectors_agree(&not(or(x, y)), &and(not(x), not(y))));
    }
}

#[test]
fn nested_scenarios() {
    assert!(!to_bool(&and(True, and(True, False))));
    assert!(to_bool(&or(False, or(False, True))));
    assert!(to_bool(&pair::and(True, pair::or(False, True))));
}

#[test]
fn operators_build_curried_combinators() {
    let x = True & !False;
    assert!(x.to_bool());
    assert!(selectors_agree(&x, &and(True, not(False))));
    assert!(!(False | (False & True)).to_bool());
    assert!((!pair::not(True)).to_bool());
}

#[test]
fn builder_helpers_match_free_functions() {
    assert!(selectors_agree(&True.negate(), &not(True)));
    assert!(selectors_agree(&False.and(True), &and(False, True)));
    assert!(selectors_agree(&False.or(True), &or(False, True)));
}

#[test]
fn results_choose_arbitrary_payloads() {
    assert_eq!(not(True).select("arg1", "arg2"), "arg2");
    assert_eq!(not(False).select("arg1", "arg2"), "arg1");
    assert_eq!(and(True, True).apply("arg1")("arg2"), "arg1");
    assert_eq!(or(False, False).apply("arg1")("arg2"), "arg2");
}

#[test]
fn canonical_forgets_structure() {
    let deep = not(not(not(and(True, or(False, True)))));
    assert!(deep.canonical().is_right());
    assert!(selectors_agree(&deep, &deep.canonical()));
}
