use super::helpers::*;
use super::host::Host;
use super::operators::apply_binary;
use super::reference::{get_reference_value, get_value, put_value};
use super::types::{Evaluated, ExecutionContext, Reference, ReferenceBase};
use crate::ast::*;
use crate::error::{JsError, JsResult};
use crate::types::{JsObject, JsValue, number_ops};

/// Evaluates expressions against one host and one execution context.
///
/// Holds no state of its own between calls, so a host may re-enter the
/// evaluator from inside [`ObjectModel::call`](super::host::ObjectModel::call)
/// with a fresh context.
pub struct Evaluator<'a, H: Host + ?Sized> {
    pub(super) host: &'a mut H,
    pub(super) ctx: &'a ExecutionContext,
}

impl<'a, H: Host + ?Sized> Evaluator<'a, H> {
    pub fn new(host: &'a mut H, ctx: &'a ExecutionContext) -> Self {
        Self { host, ctx }
    }

    pub fn evaluate(&mut self, expr: &Expression) -> JsResult<Evaluated> {
        match expr {
            Expression::Literal(lit) => Ok(Self::eval_literal(lit).into()),
            Expression::Identifier(name) => Ok(self.identifier_reference(name).into()),
            Expression::This => Ok(self.ctx.this_binding.clone().into()),
            Expression::Array(elements) => Ok(self.eval_array_literal(elements)?.into()),
            Expression::Object(props) => Ok(self.eval_object_literal(props)?.into()),
            Expression::Function(func) => Ok(JsValue::Object(self.instantiate_function(func)).into()),
            Expression::Unary(op, operand) => Ok(self.eval_unary(*op, operand)?.into()),
            Expression::Binary(op, left, right) => {
                let lval = self.evaluate_value(left)?;
                let rval = self.evaluate_value(right)?;
                Ok(apply_binary(self.host, *op, &lval, &rval)?.into())
            }
            Expression::Logical(op, left, right) => {
                let lval = self.evaluate_value(left)?;
                let short_circuit = match op {
                    LogicalOp::And => !to_boolean(&lval),
                    LogicalOp::Or => to_boolean(&lval),
                };
                if short_circuit {
                    Ok(lval.into())
                } else {
                    Ok(self.evaluate_value(right)?.into())
                }
            }
            Expression::Update(op, prefix, target) => {
                Ok(self.eval_update(*op, *prefix, target)?.into())
            }
            Expression::Assign(op, target, value) => {
                Ok(self.eval_assign(*op, target, value)?.into())
            }
            Expression::Conditional(test, cons, alt) => {
                let test_val = self.evaluate_value(test)?;
                if to_boolean(&test_val) {
                    Ok(self.evaluate_value(cons)?.into())
                } else {
                    Ok(self.evaluate_value(alt)?.into())
                }
            }
            Expression::Sequence(exprs) => {
                let Some((last, rest)) = exprs.split_last() else {
                    return Ok(JsValue::Undefined.into());
                };
                for e in rest {
                    self.evaluate(e)?;
                }
                Ok(self.evaluate_value(last)?.into())
            }
            Expression::Call(callee, args) => Ok(self.eval_call(callee, args)?.into()),
            Expression::New(callee, args) => Ok(self.eval_new(callee, args)?.into()),
            Expression::Member(obj, prop) => Ok(self.eval_member(obj, prop)?.into()),
        }
    }

    /// Evaluate and dereference.
    pub fn evaluate_value(&mut self, expr: &Expression) -> JsResult<JsValue> {
        let evaluated = self.evaluate(expr)?;
        get_value(self.host, evaluated)
    }

    fn eval_literal(lit: &Literal) -> JsValue {
        match lit {
            Literal::Null => JsValue::Null,
            Literal::Boolean(b) => JsValue::Boolean(*b),
            Literal::Number(n) => JsValue::Number(*n),
            Literal::String(s) => JsValue::string(s),
        }
    }

    // §10.3.1 Identifier Resolution
    fn identifier_reference(&self, name: &str) -> Reference {
        match self.host.resolve_binding(self.ctx.lexical_environment, name) {
            Some(env) => Reference::environment(env, name.to_string(), self.ctx.strict),
            None => Reference::unresolvable(name.to_string(), self.ctx.strict),
        }
    }

    // §11.2.1 Property Accessors
    fn eval_member(&mut self, obj: &Expression, prop: &MemberProperty) -> JsResult<Reference> {
        let base = self.evaluate_value(obj)?;
        let key = match prop {
            MemberProperty::Dot(name) => {
                check_object_coercible(&base)?;
                name.clone()
            }
            MemberProperty::Computed(expr) => {
                let key_val = self.evaluate_value(expr)?;
                check_object_coercible(&base)?;
                // Host keys are UTF-8, so unpaired surrogates collapse to U+FFFD.
                to_string_coerce(self.host, &key_val)?.to_rust_string()
            }
        };
        Ok(Reference::property(base, key, self.ctx.strict))
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: &Expression) -> JsResult<JsValue> {
        match op {
            UnaryOp::Typeof => {
                let evaluated = self.evaluate(operand)?;
                if let Evaluated::Reference(r) = &evaluated
                    && r.is_unresolvable()
                {
                    return Ok(JsValue::string("undefined"));
                }
                let val = get_value(self.host, evaluated)?;
                Ok(JsValue::string(typeof_val(&*self.host, &val)))
            }
            UnaryOp::Delete => self.eval_delete(operand),
            UnaryOp::Void => {
                self.evaluate_value(operand)?;
                Ok(JsValue::Undefined)
            }
            UnaryOp::Not => {
                let val = self.evaluate_value(operand)?;
                Ok(JsValue::Boolean(!to_boolean(&val)))
            }
            UnaryOp::Minus | UnaryOp::Plus | UnaryOp::BitNot => {
                let val = self.evaluate_value(operand)?;
                let n = to_number_coerce(self.host, &val)?;
                Ok(JsValue::Number(match op {
                    UnaryOp::Minus => number_ops::unary_minus(n),
                    UnaryOp::BitNot => number_ops::bitwise_not(n),
                    _ => n,
                }))
            }
        }
    }

    // §11.4.1 The delete Operator
    fn eval_delete(&mut self, operand: &Expression) -> JsResult<JsValue> {
        let Evaluated::Reference(r) = self.evaluate(operand)? else {
            return Ok(JsValue::Boolean(true));
        };
        match &r.base {
            ReferenceBase::Unresolvable | ReferenceBase::Environment(_) if r.strict => {
                Err(JsError::syntax_error(
                    "Delete of an unqualified identifier in strict mode.",
                ))
            }
            ReferenceBase::Unresolvable => Ok(JsValue::Boolean(true)),
            ReferenceBase::Environment(env) => {
                Ok(JsValue::Boolean(self.host.delete_binding(*env, &r.name)?))
            }
            ReferenceBase::Value(base) => {
                let obj = to_object(self.host, base)?;
                Ok(JsValue::Boolean(self.host.delete(&obj, &r.name, r.strict)?))
            }
        }
    }

    /// Evaluate an assignment target; only references may be written.
    fn target_reference(&mut self, target: &Expression, what: &str) -> JsResult<Reference> {
        let Evaluated::Reference(r) = self.evaluate(target)? else {
            return Err(JsError::reference_error(format!(
                "Invalid left-hand side in {what}"
            )));
        };
        if r.is_restricted_binding() {
            return Err(JsError::syntax_error(format!(
                "Unexpected {} in strict mode",
                r.name
            )));
        }
        Ok(r)
    }

    // §11.3 Postfix and §11.4.4-5 Prefix Increment/Decrement
    fn eval_update(&mut self, op: UpdateOp, prefix: bool, target: &Expression) -> JsResult<JsValue> {
        let r = self.target_reference(target, "update expression")?;
        let old_val = get_reference_value(self.host, &r)?;
        let old_num = to_number_coerce(self.host, &old_val)?;
        let new_num = match op {
            UpdateOp::Increment => number_ops::add(old_num, 1.0),
            UpdateOp::Decrement => number_ops::subtract(old_num, 1.0),
        };
        put_value(self.host, &r, JsValue::Number(new_num))?;
        Ok(JsValue::Number(if prefix { new_num } else { old_num }))
    }

    // §11.13 Assignment Operators
    fn eval_assign(
        &mut self,
        op: AssignOp,
        target: &Expression,
        value: &Expression,
    ) -> JsResult<JsValue> {
        let r = self.target_reference(target, "assignment")?;
        let result = match op.binary_op() {
            None => self.evaluate_value(value)?,
            Some(bin_op) => {
                let lval = get_reference_value(self.host, &r)?;
                let rval = self.evaluate_value(value)?;
                apply_binary(self.host, bin_op, &lval, &rval)?
            }
        };
        put_value(self.host, &r, result.clone())?;
        Ok(result)
    }

    fn eval_arguments(&mut self, args: &[Expression]) -> JsResult<Vec<JsValue>> {
        args.iter().map(|a| self.evaluate_value(a)).collect()
    }

    // §11.2.3 Function Calls
    fn eval_call(&mut self, callee: &Expression, args: &[Expression]) -> JsResult<JsValue> {
        let (func_val, this, name) = match self.evaluate(callee)? {
            Evaluated::Reference(r) => {
                let func_val = get_reference_value(self.host, &r)?;
                let this = match &r.base {
                    ReferenceBase::Value(base) => base.clone(),
                    ReferenceBase::Environment(env) => self.host.implicit_this_value(*env),
                    ReferenceBase::Unresolvable => JsValue::Undefined,
                };
                (func_val, this, r.name)
            }
            Evaluated::Value(v) => {
                let name = format!("{v}");
                (v, JsValue::Undefined, name)
            }
        };
        let arg_values = self.eval_arguments(args)?;
        let func = self.callable(&func_val, &name)?;
        tracing::trace!(callee = %name, argc = arg_values.len(), "call");
        self.host.call(&func, this, arg_values)
    }

    fn callable(&self, func_val: &JsValue, name: &str) -> JsResult<JsObject> {
        match func_val {
            JsValue::Object(o) if self.host.is_callable(o) => Ok(*o),
            _ => Err(JsError::type_error(format!("{name} is not a function"))),
        }
    }

    // §11.2.2 The new Operator
    fn eval_new(&mut self, callee: &Expression, args: &[Expression]) -> JsResult<JsValue> {
        let ctor_val = self.evaluate_value(callee)?;
        let arg_values = self.eval_arguments(args)?;
        let ctor = match &ctor_val {
            JsValue::Object(o) if self.host.is_constructor(o) => *o,
            _ => {
                return Err(JsError::type_error(format!(
                    "{ctor_val} is not a constructor"
                )));
            }
        };
        tracing::trace!(argc = arg_values.len(), "construct");
        self.host.construct(&ctor, arg_values)
    }
}
