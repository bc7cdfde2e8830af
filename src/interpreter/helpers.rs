use super::host::ObjectModel;
use crate::error::{JsError, JsResult};
use crate::types::{JsObject, JsString, JsValue, number_ops};

/// Conversion hint for §9.1 ToPrimitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferredType {
    Default,
    Number,
    String,
}

// §9.1 ToPrimitive
pub fn to_primitive<H: ObjectModel + ?Sized>(
    host: &mut H,
    val: &JsValue,
    hint: PreferredType,
) -> JsResult<JsValue> {
    let JsValue::Object(o) = val else {
        return Ok(val.clone());
    };
    let methods = if hint == PreferredType::String {
        ["toString", "valueOf"]
    } else {
        ["valueOf", "toString"]
    };
    for method_name in methods {
        let method = host.get(o, method_name, val)?;
        if let JsValue::Object(func) = &method
            && host.is_callable(func)
        {
            let result = host.call(func, val.clone(), Vec::new())?;
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    Err(JsError::type_error("Cannot convert object to primitive value"))
}

// §9.2 ToBoolean
pub fn to_boolean(val: &JsValue) -> bool {
    match val {
        JsValue::Undefined | JsValue::Null => false,
        JsValue::Boolean(b) => *b,
        JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
        JsValue::String(s) => !s.is_empty(),
        JsValue::Object(_) => true,
    }
}

// §9.3 ToNumber for primitives. Objects need `to_number_coerce`.
pub fn to_number(val: &JsValue) -> f64 {
    match val {
        JsValue::Undefined => f64::NAN,
        JsValue::Null => 0.0,
        JsValue::Boolean(b) => *b as u8 as f64,
        JsValue::Number(n) => *n,
        JsValue::String(s) => string_to_number(s),
        JsValue::Object(_) => f64::NAN,
    }
}

pub fn to_number_coerce<H: ObjectModel + ?Sized>(host: &mut H, val: &JsValue) -> JsResult<f64> {
    let prim = to_primitive(host, val, PreferredType::Number)?;
    Ok(to_number(&prim))
}

// StrWhiteSpaceChar: WhiteSpace and LineTerminator
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

// §9.3.1 ToNumber Applied to the String Type
fn string_to_number(s: &JsString) -> f64 {
    let rust_str = s.to_rust_string();
    let trimmed = rust_str.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    // Hex is the only prefixed form; "0b101" and "0o17" are NaN.
    if let Some(digits) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return parse_radix(digits, 16);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust's float grammar also takes "inf" and "nan"; the language's does not.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// §9.8 ToString for primitives. Objects need `to_string_coerce`.
pub fn to_js_string(val: &JsValue) -> JsString {
    match val {
        JsValue::String(s) => s.clone(),
        other => JsString::from_str(&format!("{other}")),
    }
}

pub fn to_string_coerce<H: ObjectModel + ?Sized>(
    host: &mut H,
    val: &JsValue,
) -> JsResult<JsString> {
    let prim = to_primitive(host, val, PreferredType::String)?;
    Ok(to_js_string(&prim))
}

// §9.5 ToInt32
pub fn to_int32<H: ObjectModel + ?Sized>(host: &mut H, val: &JsValue) -> JsResult<i32> {
    Ok(number_ops::to_int32(to_number_coerce(host, val)?))
}

// §9.6 ToUint32
pub fn to_uint32<H: ObjectModel + ?Sized>(host: &mut H, val: &JsValue) -> JsResult<u32> {
    Ok(number_ops::to_uint32(to_number_coerce(host, val)?))
}

// §9.9 ToObject
pub fn to_object<H: ObjectModel + ?Sized>(host: &mut H, val: &JsValue) -> JsResult<JsObject> {
    match val {
        JsValue::Object(o) => Ok(*o),
        JsValue::Undefined | JsValue::Null => Err(JsError::type_error(format!(
            "Cannot convert {val} to object"
        ))),
        _ => host.to_object(val),
    }
}

// §9.10 CheckObjectCoercible
pub fn check_object_coercible(val: &JsValue) -> JsResult<()> {
    if val.is_nullish() {
        return Err(JsError::type_error(format!(
            "Cannot read properties of {val}"
        )));
    }
    Ok(())
}

pub fn is_callable<H: ObjectModel + ?Sized>(host: &H, val: &JsValue) -> bool {
    matches!(val, JsValue::Object(o) if host.is_callable(o))
}

// §11.4.3 The typeof Operator, value half
pub fn typeof_val<H: ObjectModel + ?Sized>(host: &H, val: &JsValue) -> &'static str {
    match val {
        JsValue::Undefined => "undefined",
        JsValue::Null => "object",
        JsValue::Boolean(_) => "boolean",
        JsValue::Number(_) => "number",
        JsValue::String(_) => "string",
        JsValue::Object(o) => {
            if host.is_callable(o) {
                "function"
            } else {
                "object"
            }
        }
    }
}
