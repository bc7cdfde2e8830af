use crate::types::{JsObject, JsValue};

/// Handle to a binding container (scope) owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnvHandle {
    pub id: u64,
}

/// Per-evaluation state supplied by the statement engine.
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    pub lexical_environment: EnvHandle,
    pub this_binding: JsValue,
    pub strict: bool,
}

impl ExecutionContext {
    pub fn new(lexical_environment: EnvHandle, this_binding: JsValue) -> Self {
        Self {
            lexical_environment,
            this_binding,
            strict: false,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[derive(Clone, Debug)]
pub enum ReferenceBase {
    /// Property reference. The base may still be a primitive.
    Value(JsValue),
    Environment(EnvHandle),
    Unresolvable,
}

// §8.7 The Reference Specification Type
#[derive(Clone, Debug)]
pub struct Reference {
    pub base: ReferenceBase,
    pub name: String,
    pub strict: bool,
}

impl Reference {
    pub fn property(base: JsValue, name: String, strict: bool) -> Self {
        Self {
            base: ReferenceBase::Value(base),
            name,
            strict,
        }
    }

    pub fn environment(env: EnvHandle, name: String, strict: bool) -> Self {
        Self {
            base: ReferenceBase::Environment(env),
            name,
            strict,
        }
    }

    pub fn unresolvable(name: String, strict: bool) -> Self {
        Self {
            base: ReferenceBase::Unresolvable,
            name,
            strict,
        }
    }

    pub fn is_unresolvable(&self) -> bool {
        matches!(self.base, ReferenceBase::Unresolvable)
    }

    /// Strict references to `eval` or `arguments` bindings may not be written.
    pub(crate) fn is_restricted_binding(&self) -> bool {
        self.strict
            && matches!(self.base, ReferenceBase::Environment(_))
            && matches!(self.name.as_str(), "eval" | "arguments")
    }
}

/// Result of evaluating an expression: a value, or a reference for the caller to act on.
#[derive(Clone, Debug)]
pub enum Evaluated {
    Value(JsValue),
    Reference(Reference),
}

impl From<JsValue> for Evaluated {
    fn from(v: JsValue) -> Self {
        Evaluated::Value(v)
    }
}

impl From<Reference> for Evaluated {
    fn from(r: Reference) -> Self {
        Evaluated::Reference(r)
    }
}

#[derive(Debug, Clone)]
pub enum PropertyDescriptor {
    Data {
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<JsObject>,
        set: Option<JsObject>,
        enumerable: bool,
        configurable: bool,
    },
}

impl PropertyDescriptor {
    pub fn data(value: JsValue, writable: bool, enumerable: bool, configurable: bool) -> Self {
        PropertyDescriptor::Data {
            value,
            writable,
            enumerable,
            configurable,
        }
    }

    pub fn data_default(value: JsValue) -> Self {
        Self::data(value, true, true, true)
    }

    pub fn accessor_default(get: Option<JsObject>, set: Option<JsObject>) -> Self {
        PropertyDescriptor::Accessor {
            get,
            set,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn configurable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { configurable, .. }
            | PropertyDescriptor::Accessor { configurable, .. } => *configurable,
        }
    }
}
