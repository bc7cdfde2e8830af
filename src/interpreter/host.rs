//! The narrow interfaces the evaluator consumes from the surrounding engine.
//!
//! The evaluator never touches object storage or scope storage directly. A
//! host implements both traits; nested calls re-enter the evaluator through
//! [`ObjectModel::call`] and [`ObjectModel::construct`].

use super::types::{EnvHandle, PropertyDescriptor};
use crate::ast::FunctionExpr;
use crate::error::JsResult;
use crate::types::{JsObject, JsValue};
use std::rc::Rc;

pub trait ObjectModel {
    fn create_object(&mut self) -> JsObject;

    fn create_array(&mut self) -> JsObject;

    /// Instantiate a script closure over `scope`.
    fn create_function(
        &mut self,
        func: Rc<FunctionExpr>,
        scope: EnvHandle,
        strict: bool,
    ) -> JsObject;

    /// Wrap a primitive (Boolean, Number, String) in a temporary object.
    fn to_object(&mut self, value: &JsValue) -> JsResult<JsObject>;

    fn get_own_property(&self, obj: &JsObject, key: &str) -> Option<PropertyDescriptor>;

    fn define_own_property(
        &mut self,
        obj: &JsObject,
        key: &str,
        desc: PropertyDescriptor,
        throw: bool,
    ) -> JsResult<bool>;

    /// `[[Get]]` with accessor resolution; getters run with `receiver` as `this`.
    fn get(&mut self, obj: &JsObject, key: &str, receiver: &JsValue) -> JsResult<JsValue>;

    /// `[[Put]]`; a rejected write raises `TypeError` only when `throw` is set.
    fn put(
        &mut self,
        obj: &JsObject,
        key: &str,
        value: JsValue,
        receiver: &JsValue,
        throw: bool,
    ) -> JsResult<()>;

    fn delete(&mut self, obj: &JsObject, key: &str, strict: bool) -> JsResult<bool>;

    fn has_property(&self, obj: &JsObject, key: &str) -> bool;

    fn is_callable(&self, obj: &JsObject) -> bool;

    fn is_constructor(&self, obj: &JsObject) -> bool;

    fn call(&mut self, func: &JsObject, this: JsValue, args: Vec<JsValue>) -> JsResult<JsValue>;

    fn construct(&mut self, func: &JsObject, args: Vec<JsValue>) -> JsResult<JsValue>;

    /// `[[HasInstance]]` of a function object, used by `instanceof`.
    fn has_instance(&mut self, func: &JsObject, value: &JsValue) -> JsResult<bool>;
}

pub trait Environments {
    /// Walk the scope chain from `scope`; the record that binds `name`, if any.
    fn resolve_binding(&self, scope: EnvHandle, name: &str) -> Option<EnvHandle>;

    fn get_binding_value(&mut self, env: EnvHandle, name: &str, strict: bool) -> JsResult<JsValue>;

    fn set_mutable_binding(
        &mut self,
        env: EnvHandle,
        name: &str,
        value: JsValue,
        strict: bool,
    ) -> JsResult<()>;

    fn delete_binding(&mut self, env: EnvHandle, name: &str) -> JsResult<bool>;

    fn implicit_this_value(&self, env: EnvHandle) -> JsValue;

    /// Target of non-strict writes to unresolvable identifiers.
    fn global_object(&self) -> JsObject;

    fn new_declarative_environment(&mut self, outer: EnvHandle) -> EnvHandle;

    fn create_immutable_binding(&mut self, env: EnvHandle, name: &str, value: JsValue);
}

pub trait Host: ObjectModel + Environments {}

impl<T: ObjectModel + Environments + ?Sized> Host for T {}
