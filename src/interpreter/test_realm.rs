//! In-memory host used by the unit tests: ordinary objects, arrays, primitive
//! wrappers, native functions and script closures over expression bodies.

use super::helpers::{to_js_string, to_number, to_string_coerce};
use super::host::{Environments, ObjectModel};
use super::types::{EnvHandle, ExecutionContext, PropertyDescriptor};
use super::evaluate_value;
use crate::ast::*;
use crate::error::{JsError, JsResult};
use crate::types::{JsObject, JsString, JsValue};
use rustc_hash::FxHashMap;
use std::rc::Rc;

pub(crate) type NativeFn = Rc<dyn Fn(&mut TestRealm, JsValue, Vec<JsValue>) -> JsResult<JsValue>>;

enum ObjectKind {
    Ordinary,
    Array,
    Wrapper(JsValue),
    Native { func: NativeFn, constructor: bool },
    Script {
        func: Rc<FunctionExpr>,
        scope: EnvHandle,
        strict: bool,
    },
}

struct ObjectData {
    properties: FxHashMap<String, PropertyDescriptor>,
    property_order: Vec<String>,
    prototype: Option<JsObject>,
    kind: ObjectKind,
    extensible: bool,
}

impl ObjectData {
    fn new(kind: ObjectKind, prototype: Option<JsObject>) -> Self {
        Self {
            properties: FxHashMap::default(),
            property_order: Vec::new(),
            prototype,
            kind,
            extensible: true,
        }
    }
}

struct Binding {
    value: JsValue,
    mutable: bool,
    deletable: bool,
}

enum EnvRecord {
    Declarative {
        bindings: FxHashMap<String, Binding>,
        outer: Option<EnvHandle>,
    },
    Object {
        object: JsObject,
        outer: Option<EnvHandle>,
    },
}

impl EnvRecord {
    fn outer(&self) -> Option<EnvHandle> {
        match self {
            EnvRecord::Declarative { outer, .. } | EnvRecord::Object { outer, .. } => *outer,
        }
    }
}

pub(crate) struct TestRealm {
    objects: Vec<ObjectData>,
    envs: Vec<EnvRecord>,
    global: JsObject,
    global_env: EnvHandle,
    object_prototype: JsObject,
    function_prototype: JsObject,
    array_prototype: JsObject,
    calls: FxHashMap<String, u32>,
}

impl TestRealm {
    pub(crate) fn new() -> Self {
        let mut realm = TestRealm {
            objects: Vec::new(),
            envs: Vec::new(),
            global: JsObject { id: 0 },
            global_env: EnvHandle { id: 0 },
            object_prototype: JsObject { id: 0 },
            function_prototype: JsObject { id: 0 },
            array_prototype: JsObject { id: 0 },
            calls: FxHashMap::default(),
        };
        realm.object_prototype = realm.alloc(ObjectData::new(ObjectKind::Ordinary, None));
        let object_proto = Some(realm.object_prototype);
        realm.function_prototype = realm.alloc(ObjectData::new(ObjectKind::Ordinary, object_proto));
        realm.array_prototype = realm.alloc(ObjectData::new(ObjectKind::Ordinary, object_proto));
        realm.global = realm.alloc(ObjectData::new(ObjectKind::Ordinary, object_proto));
        realm.envs.push(EnvRecord::Object {
            object: realm.global,
            outer: None,
        });

        let value_of = realm.native(|realm, this, _| {
            if let JsValue::Object(o) = &this
                && let ObjectKind::Wrapper(p) = &realm.objects[o.id as usize].kind
            {
                return Ok(p.clone());
            }
            Ok(this)
        });
        let to_string = realm.native(|realm, this, _| {
            if let JsValue::Object(o) = &this {
                if let ObjectKind::Wrapper(p) = &realm.objects[o.id as usize].kind {
                    return Ok(JsValue::String(to_js_string(p)));
                }
                return Ok(JsValue::string("[object Object]"));
            }
            Ok(JsValue::String(to_js_string(&this)))
        });
        let join = realm.native(|realm, this, _| {
            let JsValue::Object(arr) = &this else {
                return Ok(JsValue::string(""));
            };
            let len = to_number(&realm.get(arr, "length", &this)?) as usize;
            let mut out = JsString::default();
            for i in 0..len {
                if i > 0 {
                    out = out.concat(&JsString::from_str(","));
                }
                let elem = realm.get(arr, &i.to_string(), &this)?;
                if !elem.is_nullish() {
                    out = out.concat(&to_string_coerce(realm, &elem)?);
                }
            }
            Ok(JsValue::String(out))
        });
        let (op, ap) = (realm.object_prototype, realm.array_prototype);
        realm.define_hidden(&op, "valueOf", value_of.into());
        realm.define_hidden(&op, "toString", to_string.into());
        realm.define_hidden(&ap, "toString", join.into());

        let global = realm.global;
        realm.define_hidden(&global, "undefined", JsValue::Undefined);
        realm.define_hidden(&global, "NaN", JsValue::Number(f64::NAN));
        realm.define_hidden(&global, "Infinity", JsValue::Number(f64::INFINITY));
        realm
    }

    fn alloc(&mut self, data: ObjectData) -> JsObject {
        self.objects.push(data);
        JsObject {
            id: (self.objects.len() - 1) as u64,
        }
    }

    fn data(&self, obj: &JsObject) -> &ObjectData {
        &self.objects[obj.id as usize]
    }

    fn data_mut(&mut self, obj: &JsObject) -> &mut ObjectData {
        &mut self.objects[obj.id as usize]
    }

    fn insert_property(&mut self, obj: &JsObject, key: &str, desc: PropertyDescriptor) {
        let data = self.data_mut(obj);
        if !data.properties.contains_key(key) {
            data.property_order.push(key.to_string());
        }
        data.properties.insert(key.to_string(), desc);
    }

    fn define_hidden(&mut self, obj: &JsObject, key: &str, value: JsValue) {
        self.insert_property(obj, key, PropertyDescriptor::data(value, true, false, true));
    }

    fn lookup_property(&self, obj: &JsObject, key: &str) -> Option<PropertyDescriptor> {
        let mut current = Some(*obj);
        while let Some(o) = current {
            let data = self.data(&o);
            if let Some(desc) = data.properties.get(key) {
                return Some(desc.clone());
            }
            current = data.prototype;
        }
        None
    }

    fn reject(throw: bool, message: String) -> JsResult<bool> {
        if throw {
            Err(JsError::type_error(message))
        } else {
            Ok(false)
        }
    }

    fn call_script(
        &mut self,
        func: Rc<FunctionExpr>,
        scope: EnvHandle,
        strict: bool,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> JsResult<JsValue> {
        let env = self.new_declarative_environment(scope);
        for (i, param) in func.params.iter().enumerate() {
            let value = args.get(i).cloned().unwrap_or(JsValue::Undefined);
            self.bind(env, param, value);
        }
        let this = if strict {
            this
        } else if this.is_nullish() {
            JsValue::Object(self.global)
        } else if this.is_object() {
            this
        } else {
            JsValue::Object(self.to_object(&this)?)
        };
        let ctx = ExecutionContext::new(env, this).with_strict(strict);
        for stmt in &func.body {
            match stmt {
                Statement::Empty => {}
                Statement::Expression(e) => {
                    evaluate_value(self, &ctx, e)?;
                }
                Statement::Return(e) => {
                    return match e {
                        Some(e) => evaluate_value(self, &ctx, e),
                        None => Ok(JsValue::Undefined),
                    };
                }
            }
        }
        Ok(JsValue::Undefined)
    }

    pub(crate) fn context(&self) -> ExecutionContext {
        ExecutionContext::new(self.global_env, JsValue::Object(self.global))
    }

    pub(crate) fn strict_context(&self) -> ExecutionContext {
        self.context().with_strict(true)
    }

    pub(crate) fn global_env(&self) -> EnvHandle {
        self.global_env
    }

    pub(crate) fn eval(&mut self, expr: &Expression) -> JsResult<JsValue> {
        let ctx = self.context();
        evaluate_value(self, &ctx, expr)
    }

    pub(crate) fn eval_strict(&mut self, expr: &Expression) -> JsResult<JsValue> {
        let ctx = self.strict_context();
        evaluate_value(self, &ctx, expr)
    }

    pub(crate) fn native(
        &mut self,
        f: impl Fn(&mut TestRealm, JsValue, Vec<JsValue>) -> JsResult<JsValue> + 'static,
    ) -> JsObject {
        let proto = Some(self.function_prototype);
        self.alloc(ObjectData::new(
            ObjectKind::Native {
                func: Rc::new(f),
                constructor: false,
            },
            proto,
        ))
    }

    pub(crate) fn define_global(&mut self, name: &str, value: JsValue) {
        let global = self.global;
        self.insert_property(&global, name, PropertyDescriptor::data_default(value));
    }

    pub(crate) fn global(&mut self, name: &str) -> JsValue {
        let global = self.global;
        self.get(&global, name, &JsValue::Object(global))
            .unwrap_or(JsValue::Undefined)
    }

    pub(crate) fn global_object_handle(&self) -> JsObject {
        self.global
    }

    /// Installs a global function that records each call and returns `result`.
    pub(crate) fn install_spy(&mut self, name: &str, result: JsValue) {
        let key = name.to_string();
        let spy = self.native(move |realm, _, _| {
            *realm.calls.entry(key.clone()).or_insert(0) += 1;
            Ok(result.clone())
        });
        self.define_global(name, spy.into());
    }

    pub(crate) fn calls(&self, name: &str) -> u32 {
        self.calls.get(name).copied().unwrap_or(0)
    }

    pub(crate) fn bind(&mut self, env: EnvHandle, name: &str, value: JsValue) {
        if let EnvRecord::Declarative { bindings, .. } = &mut self.envs[env.id as usize] {
            bindings.insert(
                name.to_string(),
                Binding {
                    value,
                    mutable: true,
                    deletable: false,
                },
            );
        }
    }

    pub(crate) fn prop(&mut self, value: &JsValue, key: &str) -> JsValue {
        match value {
            JsValue::Object(o) => self.get(o, key, value).unwrap_or(JsValue::Undefined),
            _ => JsValue::Undefined,
        }
    }

    pub(crate) fn own_keys(&self, obj: &JsObject) -> Vec<String> {
        self.data(obj).property_order.clone()
    }

    pub(crate) fn freeze_property(&mut self, obj: &JsObject, key: &str) {
        if let Some(PropertyDescriptor::Data { writable, configurable, .. }) =
            self.data_mut(obj).properties.get_mut(key)
        {
            *writable = false;
            *configurable = false;
        }
    }
}

impl ObjectModel for TestRealm {
    fn create_object(&mut self) -> JsObject {
        let proto = Some(self.object_prototype);
        self.alloc(ObjectData::new(ObjectKind::Ordinary, proto))
    }

    fn create_array(&mut self) -> JsObject {
        let proto = Some(self.array_prototype);
        let arr = self.alloc(ObjectData::new(ObjectKind::Array, proto));
        self.insert_property(
            &arr,
            "length",
            PropertyDescriptor::data(JsValue::Number(0.0), true, false, false),
        );
        arr
    }

    fn create_function(
        &mut self,
        func: Rc<FunctionExpr>,
        scope: EnvHandle,
        strict: bool,
    ) -> JsObject {
        let params = func.params.len();
        let proto = Some(self.function_prototype);
        let f = self.alloc(ObjectData::new(
            ObjectKind::Script {
                func,
                scope,
                strict,
            },
            proto,
        ));
        let prototype = self.create_object();
        self.define_hidden(&prototype, "constructor", f.into());
        self.insert_property(
            &f,
            "prototype",
            PropertyDescriptor::data(prototype.into(), true, false, false),
        );
        self.insert_property(
            &f,
            "length",
            PropertyDescriptor::data(JsValue::Number(params as f64), false, false, false),
        );
        f
    }

    fn to_object(&mut self, value: &JsValue) -> JsResult<JsObject> {
        match value {
            JsValue::Undefined | JsValue::Null => Err(JsError::type_error(
                "Cannot convert undefined or null to object",
            )),
            JsValue::Object(o) => Ok(*o),
            _ => {
                let proto = Some(self.object_prototype);
                let wrapper = self.alloc(ObjectData::new(ObjectKind::Wrapper(value.clone()), proto));
                if let JsValue::String(s) = value {
                    self.insert_property(
                        &wrapper,
                        "length",
                        PropertyDescriptor::data(JsValue::Number(s.len() as f64), false, false, false),
                    );
                }
                Ok(wrapper)
            }
        }
    }

    fn get_own_property(&self, obj: &JsObject, key: &str) -> Option<PropertyDescriptor> {
        self.data(obj).properties.get(key).cloned()
    }

    fn define_own_property(
        &mut self,
        obj: &JsObject,
        key: &str,
        desc: PropertyDescriptor,
        throw: bool,
    ) -> JsResult<bool> {
        match self.data(obj).properties.get(key) {
            Some(current) if !current.configurable() => {
                return Self::reject(throw, format!("Cannot redefine property: {key}"));
            }
            None if !self.data(obj).extensible => {
                return Self::reject(throw, format!("Cannot define property {key}"));
            }
            _ => {}
        }
        if matches!(self.data(obj).kind, ObjectKind::Array)
            && let Ok(index) = key.parse::<u32>()
        {
            let len = match self.data(obj).properties.get("length") {
                Some(PropertyDescriptor::Data { value, .. }) => to_number(value),
                _ => 0.0,
            };
            if f64::from(index) >= len {
                self.insert_property(
                    obj,
                    "length",
                    PropertyDescriptor::data(JsValue::Number(f64::from(index) + 1.0), true, false, false),
                );
            }
        }
        self.insert_property(obj, key, desc);
        Ok(true)
    }

    fn get(&mut self, obj: &JsObject, key: &str, receiver: &JsValue) -> JsResult<JsValue> {
        match self.lookup_property(obj, key) {
            Some(PropertyDescriptor::Data { value, .. }) => Ok(value),
            Some(PropertyDescriptor::Accessor { get: Some(getter), .. }) => {
                self.call(&getter, receiver.clone(), Vec::new())
            }
            _ => Ok(JsValue::Undefined),
        }
    }

    fn put(
        &mut self,
        obj: &JsObject,
        key: &str,
        value: JsValue,
        receiver: &JsValue,
        throw: bool,
    ) -> JsResult<()> {
        let read_only = || format!("Cannot assign to read only property '{key}'");
        match self.lookup_property(obj, key) {
            Some(PropertyDescriptor::Accessor { set: Some(setter), .. }) => {
                self.call(&setter, receiver.clone(), vec![value])?;
                return Ok(());
            }
            Some(PropertyDescriptor::Accessor { set: None, .. }) => {
                Self::reject(throw, format!("Cannot set property {key} which has only a getter"))?;
                return Ok(());
            }
            Some(PropertyDescriptor::Data { writable: false, .. }) => {
                Self::reject(throw, read_only())?;
                return Ok(());
            }
            _ => {}
        }
        if !receiver.is_object() {
            // Writes through a primitive land on a throwaway wrapper.
            Self::reject(throw, format!("Cannot create property '{key}' on primitive"))?;
            return Ok(());
        }
        let own = self.data(obj).properties.get(key).cloned();
        match own {
            Some(PropertyDescriptor::Data {
                writable,
                enumerable,
                configurable,
                ..
            }) => {
                let desc = PropertyDescriptor::data(value, writable, enumerable, configurable);
                self.insert_property(obj, key, desc);
            }
            _ => {
                self.define_own_property(obj, key, PropertyDescriptor::data_default(value), throw)?;
            }
        }
        Ok(())
    }

    fn delete(&mut self, obj: &JsObject, key: &str, strict: bool) -> JsResult<bool> {
        let configurable = match self.data(obj).properties.get(key) {
            None => return Ok(true),
            Some(desc) => desc.configurable(),
        };
        if configurable {
            let data = self.data_mut(obj);
            data.properties.remove(key);
            data.property_order.retain(|k| k != key);
            return Ok(true);
        }
        if strict {
            return Err(JsError::type_error(format!("Cannot delete property '{key}'")));
        }
        Ok(false)
    }

    fn has_property(&self, obj: &JsObject, key: &str) -> bool {
        self.lookup_property(obj, key).is_some()
    }

    fn is_callable(&self, obj: &JsObject) -> bool {
        matches!(
            self.data(obj).kind,
            ObjectKind::Native { .. } | ObjectKind::Script { .. }
        )
    }

    fn is_constructor(&self, obj: &JsObject) -> bool {
        matches!(
            self.data(obj).kind,
            ObjectKind::Native {
                constructor: true,
                ..
            } | ObjectKind::Script { .. }
        )
    }

    fn call(&mut self, func: &JsObject, this: JsValue, args: Vec<JsValue>) -> JsResult<JsValue> {
        match &self.data(func).kind {
            ObjectKind::Native { func, .. } => {
                let f = func.clone();
                f(self, this, args)
            }
            ObjectKind::Script {
                func,
                scope,
                strict,
            } => {
                let (func, scope, strict) = (func.clone(), *scope, *strict);
                self.call_script(func, scope, strict, this, args)
            }
            _ => Err(JsError::type_error("not a function")),
        }
    }

    fn construct(&mut self, func: &JsObject, args: Vec<JsValue>) -> JsResult<JsValue> {
        if let ObjectKind::Native {
            func: native,
            constructor: true,
        } = &self.data(func).kind
        {
            let f = native.clone();
            return f(self, JsValue::Undefined, args);
        }
        let proto = match self.get(func, "prototype", &JsValue::Object(*func))? {
            JsValue::Object(p) => p,
            _ => self.object_prototype,
        };
        let instance = self.alloc(ObjectData::new(ObjectKind::Ordinary, Some(proto)));
        let result = self.call(func, instance.into(), args)?;
        if result.is_object() {
            Ok(result)
        } else {
            Ok(instance.into())
        }
    }

    fn has_instance(&mut self, func: &JsObject, value: &JsValue) -> JsResult<bool> {
        let JsValue::Object(o) = value else {
            return Ok(false);
        };
        let JsValue::Object(proto) = self.get(func, "prototype", &JsValue::Object(*func))? else {
            return Err(JsError::type_error("Function has non-object prototype"));
        };
        let mut current = self.data(o).prototype;
        while let Some(p) = current {
            if p == proto {
                return Ok(true);
            }
            current = self.data(&p).prototype;
        }
        Ok(false)
    }
}

impl Environments for TestRealm {
    fn resolve_binding(&self, scope: EnvHandle, name: &str) -> Option<EnvHandle> {
        let mut current = Some(scope);
        while let Some(env) = current {
            let record = &self.envs[env.id as usize];
            let found = match record {
                EnvRecord::Declarative { bindings, .. } => bindings.contains_key(name),
                EnvRecord::Object { object, .. } => self.has_property(object, name),
            };
            if found {
                return Some(env);
            }
            current = record.outer();
        }
        None
    }

    fn get_binding_value(&mut self, env: EnvHandle, name: &str, strict: bool) -> JsResult<JsValue> {
        match &self.envs[env.id as usize] {
            EnvRecord::Declarative { bindings, .. } => match bindings.get(name) {
                Some(b) => Ok(b.value.clone()),
                None => Err(JsError::reference_error(format!("{name} is not defined"))),
            },
            EnvRecord::Object { object, .. } => {
                let object = *object;
                if self.has_property(&object, name) {
                    self.get(&object, name, &JsValue::Object(object))
                } else if strict {
                    Err(JsError::reference_error(format!("{name} is not defined")))
                } else {
                    Ok(JsValue::Undefined)
                }
            }
        }
    }

    fn set_mutable_binding(
        &mut self,
        env: EnvHandle,
        name: &str,
        value: JsValue,
        strict: bool,
    ) -> JsResult<()> {
        match &mut self.envs[env.id as usize] {
            EnvRecord::Declarative { bindings, .. } => match bindings.get_mut(name) {
                Some(b) if b.mutable => {
                    b.value = value;
                    Ok(())
                }
                Some(_) if strict => Err(JsError::type_error("Assignment to constant variable.")),
                Some(_) => Ok(()),
                None => Err(JsError::reference_error(format!("{name} is not defined"))),
            },
            EnvRecord::Object { object, .. } => {
                let object = *object;
                self.put(&object, name, value, &JsValue::Object(object), strict)
            }
        }
    }

    fn delete_binding(&mut self, env: EnvHandle, name: &str) -> JsResult<bool> {
        match &mut self.envs[env.id as usize] {
            EnvRecord::Declarative { bindings, .. } => {
                let deletable = match bindings.get(name) {
                    None => return Ok(true),
                    Some(b) => b.deletable,
                };
                if deletable {
                    bindings.remove(name);
                }
                Ok(deletable)
            }
            EnvRecord::Object { object, .. } => {
                let object = *object;
                self.delete(&object, name, false)
            }
        }
    }

    fn implicit_this_value(&self, _env: EnvHandle) -> JsValue {
        JsValue::Undefined
    }

    fn global_object(&self) -> JsObject {
        self.global
    }

    fn new_declarative_environment(&mut self, outer: EnvHandle) -> EnvHandle {
        self.envs.push(EnvRecord::Declarative {
            bindings: FxHashMap::default(),
            outer: Some(outer),
        });
        EnvHandle {
            id: (self.envs.len() - 1) as u64,
        }
    }

    fn create_immutable_binding(&mut self, env: EnvHandle, name: &str, value: JsValue) {
        if let EnvRecord::Declarative { bindings, .. } = &mut self.envs[env.id as usize] {
            bindings.insert(
                name.to_string(),
                Binding {
                    value,
                    mutable: false,
                    deletable: false,
                },
            );
        }
    }
}

pub(crate) fn num(n: f64) -> Expression {
    Expression::Literal(Literal::Number(n))
}

pub(crate) fn string(s: &str) -> Expression {
    Expression::Literal(Literal::String(s.to_string()))
}

pub(crate) fn boolean(b: bool) -> Expression {
    Expression::Literal(Literal::Boolean(b))
}

pub(crate) fn null() -> Expression {
    Expression::Literal(Literal::Null)
}

pub(crate) fn ident(name: &str) -> Expression {
    Expression::Identifier(name.to_string())
}

pub(crate) fn unary(op: UnaryOp, operand: Expression) -> Expression {
    Expression::Unary(op, Box::new(operand))
}

pub(crate) fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    Expression::Binary(op, Box::new(left), Box::new(right))
}

pub(crate) fn logical(op: LogicalOp, left: Expression, right: Expression) -> Expression {
    Expression::Logical(op, Box::new(left), Box::new(right))
}

pub(crate) fn assign(op: AssignOp, target: Expression, value: Expression) -> Expression {
    Expression::Assign(op, Box::new(target), Box::new(value))
}

pub(crate) fn update(op: UpdateOp, prefix: bool, target: Expression) -> Expression {
    Expression::Update(op, prefix, Box::new(target))
}

pub(crate) fn dot(object: Expression, name: &str) -> Expression {
    Expression::Member(Box::new(object), MemberProperty::Dot(name.to_string()))
}

pub(crate) fn index(object: Expression, key: Expression) -> Expression {
    Expression::Member(Box::new(object), MemberProperty::Computed(Box::new(key)))
}

pub(crate) fn call(callee: Expression, args: Vec<Expression>) -> Expression {
    Expression::Call(Box::new(callee), args)
}

pub(crate) fn construct(callee: Expression, args: Vec<Expression>) -> Expression {
    Expression::New(Box::new(callee), args)
}

pub(crate) fn function(params: &[&str], body: Vec<Statement>) -> Expression {
    Expression::Function(Rc::new(FunctionExpr {
        name: None,
        params: params.iter().map(|p| p.to_string()).collect(),
        body,
        is_strict: false,
    }))
}

pub(crate) fn ret(value: Expression) -> Statement {
    Statement::Return(Some(value))
}

pub(crate) fn stmt(value: Expression) -> Statement {
    Statement::Expression(value)
}

pub(crate) fn init(key: &str, value: Expression) -> Property {
    Property {
        key: PropertyKey::Identifier(key.to_string()),
        value,
        kind: PropertyKind::Init,
    }
}

pub(crate) fn getter(key: &str, body: Expression) -> Property {
    Property {
        key: PropertyKey::Identifier(key.to_string()),
        value: function(&[], vec![ret(body)]),
        kind: PropertyKind::Get,
    }
}

pub(crate) fn setter(key: &str, param: &str, body: Vec<Statement>) -> Property {
    Property {
        key: PropertyKey::Identifier(key.to_string()),
        value: function(&[param], body),
        kind: PropertyKind::Set,
    }
}

pub(crate) fn object(props: Vec<Property>) -> Expression {
    Expression::Object(props)
}

pub(crate) fn array(elements: Vec<Option<Expression>>) -> Expression {
    Expression::Array(elements)
}

pub(crate) fn number_of(value: &JsValue) -> f64 {
    match value {
        JsValue::Number(n) => *n,
        other => panic!("expected a number, got {other:?}"),
    }
}

pub(crate) fn string_of(value: &JsValue) -> String {
    match value {
        JsValue::String(s) => s.to_rust_string(),
        other => panic!("expected a string, got {other:?}"),
    }
}

pub(crate) fn bool_of(value: &JsValue) -> bool {
    match value {
        JsValue::Boolean(b) => *b,
        other => panic!("expected a boolean, got {other:?}"),
    }
}
