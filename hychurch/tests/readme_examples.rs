use hychurch::prelude::*;

#[test]
fn lib_rs_doc_example_compiles_and_behaves() {
    assert_eq!(left().apply("5V")("GRND"), "5V");
    assert!(!to_bool(&and(True, and(True, False))));
    assert!(to_bool(&(False | (False | True))));

    assert_eq!(to_int(&numeral(2)), 2);
    assert_eq!(to_int(&succ(numeral(2))), 3);
    assert!(to_bool(&is_zero(Zero)));
    assert!(!to_bool(&is_zero(Three)));
}

#[cfg(feature = "pretty")]
#[test]
fn readme_rendering_example() {
    let expr = and(True, not(False));
    assert_eq!(expr.pretty_string(), "AND (λa.λb.a) (NOT (λa.λb.b))");
    assert_eq!(succ(Two).pretty_string(), "SUCC (λf.λx.f (f x))");
    assert_eq!(numeral(3).pretty_string(), "λf.λx.f (f (f x))");
}
