use super::helpers::to_object;
use super::host::Host;
use super::types::{Evaluated, Reference, ReferenceBase};
use crate::error::{JsError, JsResult};
use crate::types::JsValue;

// §8.7.1 GetValue
pub fn get_value<H: Host + ?Sized>(host: &mut H, evaluated: Evaluated) -> JsResult<JsValue> {
    match evaluated {
        Evaluated::Value(v) => Ok(v),
        Evaluated::Reference(r) => get_reference_value(host, &r),
    }
}

pub fn get_reference_value<H: Host + ?Sized>(host: &mut H, r: &Reference) -> JsResult<JsValue> {
    match &r.base {
        ReferenceBase::Unresolvable => Err(JsError::reference_error(format!(
            "{} is not defined",
            r.name
        ))),
        ReferenceBase::Environment(env) => host.get_binding_value(*env, &r.name, r.strict),
        ReferenceBase::Value(base) => {
            // Primitive bases read through a wrapper but keep the primitive as `this`.
            let obj = to_object(host, base)?;
            host.get(&obj, &r.name, base)
        }
    }
}

// §8.7.2 PutValue
pub fn put_value<H: Host + ?Sized>(host: &mut H, r: &Reference, value: JsValue) -> JsResult<()> {
    match &r.base {
        ReferenceBase::Unresolvable => {
            if r.strict {
                return Err(JsError::reference_error(format!(
                    "{} is not defined",
                    r.name
                )));
            }
            let global = host.global_object();
            tracing::debug!(name = %r.name, "implicit global created by assignment");
            host.put(&global, &r.name, value, &JsValue::Object(global), false)
        }
        ReferenceBase::Environment(env) => {
            host.set_mutable_binding(*env, &r.name, value, r.strict)
        }
        ReferenceBase::Value(base) => {
            let obj = to_object(host, base)?;
            host.put(&obj, &r.name, value, base, r.strict)
        }
    }
}
