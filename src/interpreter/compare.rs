use super::helpers::{PreferredType, to_number, to_primitive};
use super::host::ObjectModel;
use crate::error::JsResult;
use crate::types::{JsValue, number_ops};

// §9.12 The SameValue Algorithm
pub fn same_value(left: &JsValue, right: &JsValue) -> bool {
    match (left, right) {
        (JsValue::Number(a), JsValue::Number(b)) => number_ops::same_value(*a, *b),
        _ => strict_equality(left, right),
    }
}

// §11.9.6 The Strict Equality Comparison Algorithm
pub fn strict_equality(left: &JsValue, right: &JsValue) -> bool {
    match (left, right) {
        (JsValue::Undefined, JsValue::Undefined) => true,
        (JsValue::Null, JsValue::Null) => true,
        (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
        (JsValue::Number(a), JsValue::Number(b)) => number_ops::equal(*a, *b),
        (JsValue::String(a), JsValue::String(b)) => a == b,
        (JsValue::Object(a), JsValue::Object(b)) => a.id == b.id,
        _ => false,
    }
}

// §11.9.3 The Abstract Equality Comparison Algorithm
pub fn abstract_equality<H: ObjectModel + ?Sized>(
    host: &mut H,
    left: &JsValue,
    right: &JsValue,
) -> JsResult<bool> {
    if left.kind() == right.kind() {
        return Ok(strict_equality(left, right));
    }
    if left.is_nullish() && right.is_nullish() {
        return Ok(true);
    }
    if left.is_number() && right.is_string() {
        return abstract_equality(host, left, &JsValue::Number(to_number(right)));
    }
    if left.is_string() && right.is_number() {
        return abstract_equality(host, &JsValue::Number(to_number(left)), right);
    }
    if left.is_boolean() {
        return abstract_equality(host, &JsValue::Number(to_number(left)), right);
    }
    if right.is_boolean() {
        return abstract_equality(host, left, &JsValue::Number(to_number(right)));
    }
    if right.is_object() && (left.is_string() || left.is_number()) {
        let rprim = to_primitive(host, right, PreferredType::Default)?;
        return abstract_equality(host, left, &rprim);
    }
    if left.is_object() && (right.is_string() || right.is_number()) {
        let lprim = to_primitive(host, left, PreferredType::Default)?;
        return abstract_equality(host, &lprim, right);
    }
    Ok(false)
}

/// §11.8.5 The Abstract Relational Comparison Algorithm.
///
/// Computes `left < right`. `left_first` controls which operand is converted
/// first, which is observable when conversion runs script code. `None` means
/// the operands are incomparable (a NaN was involved).
pub fn compare<H: ObjectModel + ?Sized>(
    host: &mut H,
    left: &JsValue,
    right: &JsValue,
    left_first: bool,
) -> JsResult<Option<bool>> {
    let (lprim, rprim) = if left_first {
        let lprim = to_primitive(host, left, PreferredType::Number)?;
        let rprim = to_primitive(host, right, PreferredType::Number)?;
        (lprim, rprim)
    } else {
        let rprim = to_primitive(host, right, PreferredType::Number)?;
        let lprim = to_primitive(host, left, PreferredType::Number)?;
        (lprim, rprim)
    };
    if let (JsValue::String(ls), JsValue::String(rs)) = (&lprim, &rprim) {
        return Ok(Some(ls.code_units < rs.code_units));
    }
    Ok(number_ops::less_than(to_number(&lprim), to_number(&rprim)))
}
