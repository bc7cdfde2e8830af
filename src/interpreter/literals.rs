use super::eval::Evaluator;
use super::host::Host;
use super::types::PropertyDescriptor;
use crate::ast::{Expression, FunctionExpr, Property, PropertyKey, PropertyKind};
use crate::error::{JsError, JsResult};
use crate::types::{JsObject, JsValue, number_ops};
use std::rc::Rc;

fn property_key_string(key: &PropertyKey) -> String {
    match key {
        PropertyKey::Identifier(n) => n.clone(),
        PropertyKey::String(s) => s.clone(),
        PropertyKey::Number(n) => number_ops::to_string(*n),
    }
}

impl<H: Host + ?Sized> Evaluator<'_, H> {
    // §11.1.4 Array Initialiser
    pub(super) fn eval_array_literal(
        &mut self,
        elements: &[Option<Expression>],
    ) -> JsResult<JsValue> {
        let arr = self.host.create_array();
        for (i, elem) in elements.iter().enumerate() {
            // Elisions leave a hole.
            let Some(expr) = elem else { continue };
            let value = self.evaluate_value(expr)?;
            self.host.define_own_property(
                &arr,
                &i.to_string(),
                PropertyDescriptor::data_default(value),
                false,
            )?;
        }
        let arr_val = JsValue::Object(arr);
        self.host.put(
            &arr,
            "length",
            JsValue::Number(elements.len() as f64),
            &arr_val,
            false,
        )?;
        Ok(arr_val)
    }

    // §11.1.5 Object Initialiser
    pub(super) fn eval_object_literal(&mut self, props: &[Property]) -> JsResult<JsValue> {
        let obj = self.host.create_object();
        for prop in props {
            let key = property_key_string(&prop.key);
            let desc = match prop.kind {
                PropertyKind::Init => {
                    let value = self.evaluate_value(&prop.value)?;
                    PropertyDescriptor::data_default(value)
                }
                PropertyKind::Get => {
                    let getter = self.accessor_function(&prop.value, &key)?;
                    PropertyDescriptor::accessor_default(Some(getter), None)
                }
                PropertyKind::Set => {
                    let setter = self.accessor_function(&prop.value, &key)?;
                    PropertyDescriptor::accessor_default(None, Some(setter))
                }
            };
            let desc = match self.host.get_own_property(&obj, &key) {
                Some(previous) => self.resolve_duplicate(&key, previous, desc)?,
                None => desc,
            };
            self.host.define_own_property(&obj, &key, desc, false)?;
        }
        Ok(JsValue::Object(obj))
    }

    fn accessor_function(&mut self, value: &Expression, key: &str) -> JsResult<JsObject> {
        let Expression::Function(func) = value else {
            return Err(JsError::syntax_error(format!(
                "Accessor for '{key}' must be a function"
            )));
        };
        Ok(self.instantiate_function(func))
    }

    /// Conflict rules for a key already defined earlier in the same literal.
    fn resolve_duplicate(
        &self,
        key: &str,
        previous: PropertyDescriptor,
        desc: PropertyDescriptor,
    ) -> JsResult<PropertyDescriptor> {
        match (previous, desc) {
            (PropertyDescriptor::Data { .. }, desc @ PropertyDescriptor::Data { .. }) => {
                if self.ctx.strict {
                    return Err(JsError::syntax_error(format!(
                        "Duplicate data property '{key}' in object literal not allowed in strict mode"
                    )));
                }
                Ok(desc)
            }
            (PropertyDescriptor::Data { .. }, PropertyDescriptor::Accessor { .. })
            | (PropertyDescriptor::Accessor { .. }, PropertyDescriptor::Data { .. }) => {
                Err(JsError::syntax_error(format!(
                    "Object literal may not have data and accessor property with the same name '{key}'"
                )))
            }
            (
                PropertyDescriptor::Accessor {
                    get: prev_get,
                    set: prev_set,
                    ..
                },
                PropertyDescriptor::Accessor { get, set, .. },
            ) => {
                if (prev_get.is_some() && get.is_some()) || (prev_set.is_some() && set.is_some()) {
                    return Err(JsError::syntax_error(format!(
                        "Object literal may not have multiple get/set accessors with the same name '{key}'"
                    )));
                }
                tracing::trace!(key, "merging accessor halves");
                Ok(PropertyDescriptor::accessor_default(
                    get.or(prev_get),
                    set.or(prev_set),
                ))
            }
        }
    }

    /// Create a closure for a function expression in the current context.
    pub(super) fn instantiate_function(&mut self, func: &Rc<FunctionExpr>) -> JsObject {
        let strict = func.is_strict || self.ctx.strict;
        let scope = self
            .host
            .new_declarative_environment(self.ctx.lexical_environment);
        let closure = self.host.create_function(Rc::clone(func), scope, strict);
        if let Some(name) = &func.name {
            self.host
                .create_immutable_binding(scope, name, JsValue::Object(closure));
        }
        closure
    }
}
