use serde_json::json;
use streamables_ui::{ToDisplayString, UNDEFINED};

#[test]
fn strings_are_verbatim() {
    assert_eq!("hello".to_display_string(), "hello");
    assert_eq!(String::from("").to_display_string(), "");
    assert_eq!(json!("x y").to_display_string(), "x y");
}

#[test]
fn booleans() {
    assert_eq!(true.to_display_string(), "true");
    assert_eq!(json!(false).to_display_string(), "false");
}

#[test]
fn null_and_undefined() {
    assert_eq!(json!(null).to_display_string(), "null");
    assert_eq!(None::<serde_json::Value>.to_display_string(), UNDEFINED);
    assert_eq!(Some(json!(null)).to_display_string(), "null");
}

#[test]
fn integers() {
    assert_eq!(42u8.to_display_string(), "42");
    assert_eq!((-7i64).to_display_string(), "-7");
    assert_eq!(json!(u64::MAX).to_display_string(), "18446744073709551615");
}

#[test]
fn floats() {
    assert_eq!(42.0f64.to_display_string(), "42");
    assert_eq!(json!(2.5).to_display_string(), "2.5");
    assert_eq!((-0.0f64).to_display_string(), "0");
    assert_eq!(f64::NAN.to_display_string(), "NaN");
    assert_eq!(f64::INFINITY.to_display_string(), "Infinity");
    assert_eq!(1.5e22f64.to_display_string(), "1.5e+22");
}

#[test]
fn large_whole_floats_use_shortest_digits() {
    assert_eq!(123456789012345680000.0f64.to_display_string(), "123456789012345680000");
    assert_eq!(json!(1e20).to_display_string(), "100000000000000000000");
}

#[test]
fn tiny_floats_use_exponent_form() {
    assert_eq!(1e-7f64.to_display_string(), "1e-7");
    assert_eq!(json!(-2.5e-8).to_display_string(), "-2.5e-8");
    assert_eq!(0.000001f64.to_display_string(), "0.000001");
}

#[test]
fn arrays_join_with_commas() {
    assert_eq!(json!([1, "a", true]).to_display_string(), "1,a,true");
    assert_eq!(json!([1, null, 3]).to_display_string(), "1,,3");
    assert_eq!(json!([[1, 2], [3]]).to_display_string(), "1,2,3");
    assert_eq!(json!([]).to_display_string(), "");
}

#[test]
fn objects_use_generic_text() {
    assert_eq!(json!({}).to_display_string(), "[object Object]");
    assert_eq!(json!({"k": [1]}).to_display_string(), "[object Object]");
}

#[test]
fn references_delegate() {
    let value = json!(3);
    let r = &&value;
    assert_eq!(r.to_display_string(), "3");
}
