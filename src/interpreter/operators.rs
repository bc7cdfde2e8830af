use super::compare::{abstract_equality, compare, strict_equality};
use super::helpers::*;
use super::host::ObjectModel;
use crate::ast::BinaryOp;
use crate::error::{JsError, JsResult};
use crate::types::{JsValue, number_ops};

/// Apply a binary operator to two already-resolved operands.
///
/// Shared by plain binary expressions and compound assignment, so `*=`, `/=`
/// and `%=` inherit the Undefined short-circuit of their operators.
pub fn apply_binary<H: ObjectModel + ?Sized>(
    host: &mut H,
    op: BinaryOp,
    left: &JsValue,
    right: &JsValue,
) -> JsResult<JsValue> {
    let value = match op {
        BinaryOp::Add => {
            let lprim = to_primitive(host, left, PreferredType::Default)?;
            let rprim = to_primitive(host, right, PreferredType::Default)?;
            if lprim.is_string() || rprim.is_string() {
                JsValue::String(to_js_string(&lprim).concat(&to_js_string(&rprim)))
            } else {
                JsValue::Number(number_ops::add(to_number(&lprim), to_number(&rprim)))
            }
        }
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
            if left.is_undefined() || right.is_undefined() =>
        {
            JsValue::Undefined
        }
        BinaryOp::Sub => numeric(host, left, right, number_ops::subtract)?,
        BinaryOp::Mul => numeric(host, left, right, number_ops::multiply)?,
        BinaryOp::Div => numeric(host, left, right, number_ops::divide)?,
        BinaryOp::Mod => numeric(host, left, right, number_ops::remainder)?,
        BinaryOp::LShift => numeric(host, left, right, number_ops::left_shift)?,
        BinaryOp::RShift => numeric(host, left, right, number_ops::signed_right_shift)?,
        BinaryOp::URShift => numeric(host, left, right, number_ops::unsigned_right_shift)?,
        BinaryOp::BitAnd => numeric(host, left, right, number_ops::bitwise_and)?,
        BinaryOp::BitOr => numeric(host, left, right, number_ops::bitwise_or)?,
        BinaryOp::BitXor => numeric(host, left, right, number_ops::bitwise_xor)?,
        BinaryOp::Eq => JsValue::Boolean(abstract_equality(host, left, right)?),
        BinaryOp::NotEq => JsValue::Boolean(!abstract_equality(host, left, right)?),
        BinaryOp::StrictEq => JsValue::Boolean(strict_equality(left, right)),
        BinaryOp::StrictNotEq => JsValue::Boolean(!strict_equality(left, right)),
        // `a > b` and `a <= b` swap operands but must still convert `a` first.
        BinaryOp::Lt => JsValue::Boolean(compare(host, left, right, true)? == Some(true)),
        BinaryOp::Gt => JsValue::Boolean(compare(host, right, left, false)? == Some(true)),
        BinaryOp::LtEq => JsValue::Boolean(compare(host, right, left, false)? == Some(false)),
        BinaryOp::GtEq => JsValue::Boolean(compare(host, left, right, true)? == Some(false)),
        BinaryOp::In => {
            let JsValue::Object(obj) = right else {
                return Err(JsError::type_error(format!(
                    "Cannot use 'in' operator to search for '{left}' in {right}"
                )));
            };
            // Host keys are UTF-8, so unpaired surrogates collapse to U+FFFD.
            let key = to_string_coerce(host, left)?.to_rust_string();
            JsValue::Boolean(host.has_property(obj, &key))
        }
        BinaryOp::Instanceof => {
            let func = match right {
                JsValue::Object(o) if host.is_callable(o) => *o,
                _ => {
                    return Err(JsError::type_error(
                        "Right-hand side of 'instanceof' is not callable",
                    ));
                }
            };
            JsValue::Boolean(host.has_instance(&func, left)?)
        }
    };
    Ok(value)
}

/// ToNumber on both operands, left first, then the numeric operation.
fn numeric<H: ObjectModel + ?Sized>(
    host: &mut H,
    left: &JsValue,
    right: &JsValue,
    op: fn(f64, f64) -> f64,
) -> JsResult<JsValue> {
    let lnum = to_number_coerce(host, left)?;
    let rnum = to_number_coerce(host, right)?;
    Ok(JsValue::Number(op(lnum, rnum)))
}
