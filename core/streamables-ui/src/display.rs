//! Total conversion of action arguments to display strings.
//!
//! Descriptors are authored against script-engine string coercion, so the
//! rendering here follows it: `null` prints as `"null"`, a missing argument as
//! `"undefined"`, integral floats drop their fraction, arrays join with commas
//! and objects collapse to `"[object Object]"`.

use serde_json::{Number, Value};

/// Rendering of an argument the caller did not supply.
pub const UNDEFINED: &str = "undefined";

const OBJECT: &str = "[object Object]";

/// Conversion to the string an action displays. Must never panic.
pub trait ToDisplayString {
    fn to_display_string(&self) -> String;
}

impl ToDisplayString for str {
    fn to_display_string(&self) -> String {
        self.to_owned()
    }
}

impl ToDisplayString for String {
    fn to_display_string(&self) -> String {
        self.clone()
    }
}

impl ToDisplayString for bool {
    fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl ToDisplayString for f64 {
    fn to_display_string(&self) -> String {
        format_f64(*self)
    }
}

macro_rules! integer_display {
    ($($ty:ty),*) => {
        $(
            impl ToDisplayString for $ty {
                fn to_display_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToDisplayString for Number {
    fn to_display_string(&self) -> String {
        if let Some(i) = self.as_i64() {
            i.to_string()
        } else if let Some(u) = self.as_u64() {
            u.to_string()
        } else {
            self.as_f64().map_or_else(|| self.to_string(), format_f64)
        }
    }
}

impl ToDisplayString for Value {
    fn to_display_string(&self) -> String {
        match self {
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_display_string(),
            Value::Number(n) => n.to_display_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => other.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => OBJECT.to_owned(),
        }
    }
}

/// `None` is an argument that was never passed.
impl<T: ToDisplayString> ToDisplayString for Option<T> {
    fn to_display_string(&self) -> String {
        match self {
            Some(v) => v.to_display_string(),
            None => UNDEFINED.to_owned(),
        }
    }
}

impl<T: ToDisplayString + ?Sized> ToDisplayString for &T {
    fn to_display_string(&self) -> String {
        (**self).to_display_string()
    }
}

/// Number-to-string in script-engine form: shortest round-trip digits,
/// plain decimal for magnitudes in `[1e-6, 1e21)`, exponent form outside.
fn format_f64(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_owned();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `1.2345e20`.
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // decimal point sits after the first `point` digits
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exp.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exp.abs())
        }
    };

    if n < 0.0 { format!("-{body}") } else { body }
}
