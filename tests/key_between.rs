//! Known answers for key generation.

use orderkey::Error;
use orderkey::codec::SMALLEST_INTEGER;
use orderkey::float64_approx;
use orderkey::key_between;
use orderkey::n_keys_between;
use orderkey::validate_order_key;

// =============================================================================
// key_between
// =============================================================================

fn check(a: &str, b: &str, expected: &str) {
    match key_between(a, b) {
        Ok(key) => assert_eq!(key, expected, "key_between({:?}, {:?})", a, b),
        Err(error) => panic!("key_between({:?}, {:?}) failed: {}", a, b, error),
    }
}

fn check_err(a: &str, b: &str, message: &str) {
    match key_between(a, b) {
        Ok(key) => panic!("key_between({:?}, {:?}) returned {}", a, b, key),
        Err(error) => assert_eq!(error.to_string(), message),
    }
}

#[test]
fn empty_range_is_zero() {
    check("", "", "a0");
}

#[test]
fn open_above() {
    check("a0", "", "a1");
    check("a1", "", "a2");
    check("bzz", "", "c000");
}

#[test]
fn open_below() {
    check("", "a0", "Zz");
    check("", "Zz", "Zy");
    check("", "Y00", "Xzzz");
    check("", "a0V", "a0");
    check("", "b999", "b99");
}

#[test]
fn bounded() {
    check("a0", "a1", "a0V");
    check("a1", "a2", "a1V");
    check("a0V", "a1", "a0l");
    check("Zz", "a0", "ZzV");
    check("Zz", "a1", "a0");
    check("a0", "a0V", "a0G");
    check("a0", "a0G", "a08");
    check("b125", "b129", "b127");
    check("a0", "a1V", "a1");
    check("Zz", "a01", "a0");
    check("aV", "aV0V", "aV0G");
}

#[test]
fn at_the_smallest_integer() {
    check_err("", SMALLEST_INTEGER, &format!("invalid order key: {}", SMALLEST_INTEGER));
    let just_above = format!("{}1", SMALLEST_INTEGER);
    check("", &just_above, &format!("{}0V", SMALLEST_INTEGER));
}

#[test]
fn decrementing_onto_the_smallest_integer() {
    let one = format!("A{}1", "0".repeat(25));
    let key = key_between("", &one).unwrap();
    assert_eq!(key, format!("{}V", SMALLEST_INTEGER));
    assert!(validate_order_key(&key).is_ok());
    assert!(key < one);

    let two = format!("A{}2", "0".repeat(25));
    let expected = format!("{0}G {0}V {1}", SMALLEST_INTEGER, one);
    check_n("", &two, 3, &expected);
}

#[test]
fn at_the_largest_integer() {
    let below_largest = format!("{}y", "z".repeat(26));
    let largest = "z".repeat(27);
    check(&below_largest, "", &largest);
    check(&largest, "", &format!("{}V", largest));
}

#[test]
fn invalid_inputs() {
    check_err("a00", "", "invalid order key: a00");
    check_err("a00", "a1", "invalid order key: a00");
    check_err("0", "1", "invalid order key head: 0");
    check_err("a1", "a0", "a1 >= a0");
    check_err("a1", "a1", "a1 >= a1");
}

#[test]
fn invalid_inputs_by_kind() {
    assert_eq!(key_between("a0", "b1"), Err(Error::InvalidKey("b1".into())));
    assert_eq!(key_between("!", ""), Err(Error::InvalidHead('!')));
    assert!(matches!(key_between("a0", "a1~"), Err(Error::InvalidDigit { digit: '~', .. })));
    assert_eq!(
        key_between("a1", "a0"),
        Err(Error::Range { a: "a1".into(), b: "a0".into() })
    );
}

#[test]
fn deterministic() {
    for (a, b) in [("", ""), ("a0", "a1"), ("Zz", "a0"), ("", "Y00")] {
        assert_eq!(key_between(a, b).unwrap(), key_between(a, b).unwrap());
    }
}

// =============================================================================
// n_keys_between
// =============================================================================

fn check_n(a: &str, b: &str, n: usize, expected: &str) {
    let keys = n_keys_between(a, b, n).unwrap();
    assert_eq!(keys.join(" "), expected);
}

#[test]
fn n_keys_open_both() {
    check_n("", "", 5, "a0 a1 a2 a3 a4");
}

#[test]
fn n_keys_open_above() {
    check_n("a4", "", 10, "a5 a6 a7 a8 a9 aA aB aC aD aE");
}

#[test]
fn n_keys_open_below() {
    check_n("", "a0", 5, "Zv Zw Zx Zy Zz");
}

#[test]
fn n_keys_bounded() {
    check_n(
        "a0",
        "a2",
        20,
        "a04 a08 a0G a0K a0O a0V a0Z a0d a0l a0t a1 a14 a18 a1G a1O a1V a1Z a1d a1l a1t",
    );
}

#[test]
fn n_keys_trivial_counts() {
    assert!(n_keys_between("a0", "a1", 0).unwrap().is_empty());
    assert_eq!(n_keys_between("a0", "a1", 1).unwrap(), ["a0V"]);
}

#[test]
fn n_keys_fail_as_a_whole() {
    assert_eq!(
        n_keys_between("a1", "a0", 3),
        Err(Error::Range { a: "a1".into(), b: "a0".into() })
    );
    assert_eq!(n_keys_between("a00", "", 3), Err(Error::InvalidKey("a00".into())));
}

// =============================================================================
// float64_approx
// =============================================================================

#[test]
fn approximations() {
    assert_eq!(float64_approx("a0").unwrap(), 0.0);
    assert_eq!(float64_approx("a1").unwrap(), 1.0);
    assert_eq!(float64_approx("Z1").unwrap(), -1.0);
    assert_eq!(float64_approx("a0V").unwrap(), 0.5);
}

#[test]
fn approximations_follow_generated_order() {
    let keys = n_keys_between("a0", "a2", 20).unwrap();
    let values: Vec<f64> = keys.iter().map(|k| float64_approx(k).unwrap()).collect();
    for pair in values.windows(2) {
        assert!(pair[0] < pair[1], "{:?}", values);
    }
}
