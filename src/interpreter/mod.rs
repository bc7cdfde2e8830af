//! Expression evaluation core.
//!
//! The statement engine owns scopes and objects and exposes them through
//! [`Host`]; this module turns expression trees into values or references.

use crate::ast::Expression;
use crate::error::JsResult;
use crate::types::JsValue;

mod types;
pub use types::*;

mod host;
pub use host::{Environments, Host, ObjectModel};

mod helpers;
pub use helpers::{
    PreferredType, check_object_coercible, is_callable, to_boolean, to_int32, to_js_string,
    to_number, to_number_coerce, to_object, to_primitive, to_string_coerce, to_uint32, typeof_val,
};

mod compare;
pub use compare::{abstract_equality, compare, same_value, strict_equality};

mod operators;
pub use operators::apply_binary;

mod reference;
pub use reference::{get_reference_value, get_value, put_value};

mod eval;
pub use eval::Evaluator;

mod literals;

#[cfg(test)]
pub(crate) mod test_realm;

/// Evaluate `expr` in `ctx`, leaving identifiers and member accesses as references.
pub fn evaluate<H: Host + ?Sized>(
    host: &mut H,
    ctx: &ExecutionContext,
    expr: &Expression,
) -> JsResult<Evaluated> {
    Evaluator::new(host, ctx).evaluate(expr)
}

/// Evaluate `expr` in `ctx` and dereference the result.
pub fn evaluate_value<H: Host + ?Sized>(
    host: &mut H,
    ctx: &ExecutionContext,
    expr: &Expression,
) -> JsResult<JsValue> {
    Evaluator::new(host, ctx).evaluate_value(expr)
}
