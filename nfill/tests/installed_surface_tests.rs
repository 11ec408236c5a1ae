//! Edge cases of the installed `Math` and `Number` surface, exercised through
//! host calls the way a script would see them.

use nfill::prelude::*;

fn host() -> Host {
    polyfilled_host(HostCapabilities::default()).unwrap()
}

fn math(host: &Host, name: &str, args: &[Value]) -> f64 {
    match host.call(NamespaceId::Math, name, args).unwrap() {
        Value::Number(n) => n,
        other => panic!("Math.{name} returned {other:?}"),
    }
}

fn number_pred(host: &Host, name: &str, arg: Value) -> bool {
    match host.call(NamespaceId::Number, name, &[arg]).unwrap() {
        Value::Boolean(b) => b,
        other => panic!("Number.{name} returned {other:?}"),
    }
}

fn is_neg_zero(x: f64) -> bool {
    FloatBits64::from_float(x).is_negative_zero()
}

fn is_pos_zero(x: f64) -> bool {
    FloatBits64::from_float(x).is_positive_zero()
}

#[test]
fn sign_cases() {
    let h = host();
    assert!(is_neg_zero(math(&h, "sign", &[(-0.0).into()])));
    assert!(is_pos_zero(math(&h, "sign", &[0.0.into()])));
    assert!(math(&h, "sign", &[f64::NAN.into()]).is_nan());
    assert_eq!(math(&h, "sign", &[(-5).into()]), -1.0);
    assert_eq!(math(&h, "sign", &[5.into()]), 1.0);
}

#[test]
fn negative_zero_survives_bit_for_bit() {
    let h = host();
    for name in ["sinh", "tanh", "expm1", "log1p", "cbrt", "trunc", "fround", "asinh", "atanh"] {
        let r = math(&h, name, &[(-0.0).into()]);
        if matches!(name, "asinh" | "atanh") {
            // log-based formulas collapse the sign of zero
            assert_eq!(r, 0.0, "{name}(-0)");
        } else {
            assert!(is_neg_zero(r), "{name}(-0) lost its sign");
        }
    }
}

#[test]
fn inverse_hyperbolic_boundaries() {
    let h = host();
    assert_eq!(math(&h, "asinh", &[f64::NEG_INFINITY.into()]), f64::NEG_INFINITY);
    assert_eq!(math(&h, "asinh", &[f64::INFINITY.into()]), f64::INFINITY);

    assert!(is_pos_zero(math(&h, "acosh", &[1.into()])));
    assert!(math(&h, "acosh", &[0.999_999_999.into()]).is_nan());
    assert!((math(&h, "acosh", &[2.into()]) - 1.316_957_896_924_816_6).abs() < 1e-15);

    assert_eq!(math(&h, "atanh", &[1.into()]), f64::INFINITY);
    assert_eq!(math(&h, "atanh", &[(-1).into()]), f64::NEG_INFINITY);
    assert!(math(&h, "atanh", &[2.into()]).is_nan());
}

#[test]
fn hypot_and_trunc() {
    let h = host();
    assert_eq!(math(&h, "hypot", &[3.into(), 4.into()]), 5.0);
    assert_eq!(math(&h, "hypot", &[3.into(), 4.into(), 0.into()]), 5.0);
    assert!(is_pos_zero(math(&h, "hypot", &[])));

    assert_eq!(math(&h, "trunc", &[4.7.into()]), 4.0);
    assert_eq!(math(&h, "trunc", &[(-4.7).into()]), -4.0);
    assert!(is_neg_zero(math(&h, "trunc", &[(-0.7).into()])));
}

#[test]
fn thirty_two_bit_operations() {
    let h = host();
    assert_eq!(math(&h, "clz32", &[1.into()]), 31.0);
    assert_eq!(math(&h, "clz32", &[0.into()]), 32.0);
    assert_eq!(math(&h, "clz32", &[(-1).into()]), 0.0);
    assert_eq!(math(&h, "clz32", &[f64::NEG_INFINITY.into()]), 32.0);
    assert_eq!(math(&h, "clz32", &[]), 32.0);
    assert_eq!(math(&h, "clz32", &[(-0.5).into()]), 32.0);
    assert_eq!(math(&h, "clz32", &[(-4_294_967_296.0).into()]), 32.0);

    assert_eq!(math(&h, "imul", &[3.into(), 4.into()]), 12.0);
    assert_eq!(math(&h, "imul", &[4_294_967_295.0.into(), 5.into()]), -5.0);
    assert_eq!(math(&h, "imul", &["0xffffffff".into(), "5".into()]), -5.0);
}

#[test]
fn classification_predicates() {
    let h = host();
    assert!(number_pred(&h, "isInteger", 4.0.into()));
    assert!(!number_pred(&h, "isInteger", 4.5.into()));
    assert!(!number_pred(&h, "isInteger", f64::INFINITY.into()));
    assert!(!number_pred(&h, "isInteger", "4".into()));

    let two_pow_53 = 9_007_199_254_740_992.0_f64;
    assert!(!number_pred(&h, "isSafeInteger", two_pow_53.into()));
    assert!(number_pred(&h, "isSafeInteger", (two_pow_53 - 1.0).into()));
    assert!(number_pred(&h, "isSafeInteger", (1.0 - two_pow_53).into()));

    assert!(number_pred(&h, "isNaN", f64::NAN.into()));
    assert!(!number_pred(&h, "isNaN", "NaN".into()));
    assert!(number_pred(&h, "isFinite", 0.into()));
    assert!(!number_pred(&h, "isFinite", "0".into()));
    assert!(!number_pred(&h, "isFinite", Value::Null));
}

#[test]
fn parse_aliases_behave_like_the_globals() {
    let h = host();
    let call = |name: &str, args: &[Value]| h.call(NamespaceId::Number, name, args).unwrap();

    assert_eq!(call("parseFloat", &["2.75abc".into()]), Value::Number(2.75));
    assert_eq!(call("parseInt", &["0x1A".into()]), Value::Number(26.0));
    assert_eq!(call("parseInt", &["101".into(), 2.into()]), Value::Number(5.0));
    assert_eq!(
        call("parseFloat", &["  -Infinity".into()]),
        h.call(NamespaceId::Global, "parseFloat", &["  -Infinity".into()]).unwrap()
    );
}

#[test]
fn constants_have_their_values() {
    let h = host();
    let number = h.number();
    assert_eq!(number.number("EPSILON"), Some(f64::EPSILON));
    assert_eq!(number.number("MAX_SAFE_INTEGER"), Some(9_007_199_254_740_991.0));
    assert_eq!(number.number("MIN_SAFE_INTEGER"), Some(-9_007_199_254_740_991.0));
}
