//! Representative values for symbol environments.
//!
//! Completion never evaluates code. A binding only needs to say what shape of
//! value it holds so that member names can be enumerated and `a.b.c` paths
//! can be stepped through. Objects keep insertion order so enumeration order
//! is the order the host declared the properties in.
//!
//! Primitive kinds expose their built-in ("apparent") members through fixed
//! tables: `"x".` offers `charAt`, `length`, and so on even though a string
//! value has no own properties.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The coarse runtime kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

/// A callable value with optional own properties and a representative
/// return value for zero-argument calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionValue {
    pub properties: IndexMap<String, Value>,
    pub returns: Option<Box<Value>>,
}

impl FunctionValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(value: Value) -> Self {
        Self {
            properties: IndexMap::new(),
            returns: Some(Box::new(value)),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

/// A representative value bound to a name in a symbol environment.
///
/// Converts from JSON: objects, arrays, and primitives map directly. A JSON
/// object of the form `{"$function": {"properties": {...}, "returns": ...}}`
/// (both keys optional) describes a [`Value::Function`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Function(FunctionValue),
}

/// JSON key marking an object as a function description.
pub const FUNCTION_MARKER: &str = "$function";

impl Value {
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Function(_) => ValueKind::Function,
        }
    }

    /// `null` or `undefined`: nothing can be completed on it.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// A placeholder value of `kind`.
    pub fn representative(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Undefined => Value::Undefined,
            ValueKind::Null => Value::Null,
            ValueKind::Boolean => Value::Bool(false),
            ValueKind::Number => Value::Number(0.0),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Array => Value::Array(Vec::new()),
            ValueKind::Object => Value::Object(IndexMap::new()),
            ValueKind::Function => Value::Function(FunctionValue::new()),
        }
    }

    /// Names of own enumerable properties, in insertion order.
    pub fn own_property_names(&self) -> Vec<String> {
        match self {
            Value::Object(props) => props.keys().cloned().collect(),
            Value::Function(func) => func.properties.keys().cloned().collect(),
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Look up a member: own properties first, then the built-in members of
    /// the value's kind. Built-in methods come back as functions whose
    /// `returns` is a representative of the method's result.
    pub fn member(&self, name: &str) -> Option<Value> {
        let own = match self {
            Value::Object(props) => props.get(name).cloned(),
            Value::Function(func) => func.properties.get(name).cloned(),
            Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i).cloned()),
            _ => None,
        };
        own.or_else(|| apparent_member(self.kind(), name).map(|member| member.to_value()))
    }

    /// Invoke with no arguments: the declared return value of a function.
    pub fn call(&self) -> Option<Value> {
        match self {
            Value::Function(func) => func.returns.as_deref().cloned(),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(mut map) => {
                if map.len() == 1
                    && matches!(map.get(FUNCTION_MARKER), Some(Json::Object(_)))
                    && let Some(Json::Object(mut spec)) = map.remove(FUNCTION_MARKER)
                {
                    let properties = match spec.remove("properties") {
                        Some(Json::Object(props)) => props
                            .into_iter()
                            .map(|(k, v)| (k, Value::from(v)))
                            .collect(),
                        _ => IndexMap::new(),
                    };
                    let returns = spec.remove("returns").map(|v| Box::new(Value::from(v)));
                    return Value::Function(FunctionValue {
                        properties,
                        returns,
                    });
                }
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Value::Undefined | Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Object(props) => {
                Json::Object(props.into_iter().map(|(k, v)| (k, Json::from(v))).collect())
            }
            Value::Function(func) => {
                let mut spec = serde_json::Map::new();
                if !func.properties.is_empty() {
                    spec.insert(
                        "properties".to_string(),
                        Json::Object(
                            func.properties
                                .into_iter()
                                .map(|(k, v)| (k, Json::from(v)))
                                .collect(),
                        ),
                    );
                }
                if let Some(returns) = func.returns {
                    spec.insert("returns".to_string(), Json::from(*returns));
                }
                let mut marker = serde_json::Map::new();
                marker.insert(FUNCTION_MARKER.to_string(), Json::Object(spec));
                Json::Object(marker)
            }
        }
    }
}

// =============================================================================
// Apparent members of built-in kinds
// =============================================================================

/// What an apparent member yields when accessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApparentMemberKind {
    /// A data property of the given kind.
    Value(ValueKind),
    /// A method; `Some(kind)` when its result kind is known.
    Method(Option<ValueKind>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApparentMember {
    pub name: &'static str,
    pub kind: ApparentMemberKind,
}

impl ApparentMember {
    const fn value(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind: ApparentMemberKind::Value(kind),
        }
    }

    const fn method(name: &'static str, returns: Option<ValueKind>) -> Self {
        Self {
            name,
            kind: ApparentMemberKind::Method(returns),
        }
    }

    pub fn to_value(&self) -> Value {
        match self.kind {
            ApparentMemberKind::Value(kind) => Value::representative(kind),
            ApparentMemberKind::Method(returns) => Value::Function(FunctionValue {
                properties: IndexMap::new(),
                returns: returns.map(|kind| Box::new(Value::representative(kind))),
            }),
        }
    }
}

use ValueKind as K;

const STRING_MEMBERS: &[ApparentMember] = &[
    ApparentMember::method("at", Some(K::String)),
    ApparentMember::method("charAt", Some(K::String)),
    ApparentMember::method("charCodeAt", Some(K::Number)),
    ApparentMember::method("codePointAt", Some(K::Number)),
    ApparentMember::method("concat", Some(K::String)),
    ApparentMember::method("endsWith", Some(K::Boolean)),
    ApparentMember::method("includes", Some(K::Boolean)),
    ApparentMember::method("indexOf", Some(K::Number)),
    ApparentMember::method("lastIndexOf", Some(K::Number)),
    ApparentMember::value("length", K::Number),
    ApparentMember::method("localeCompare", Some(K::Number)),
    ApparentMember::method("match", Some(K::Array)),
    ApparentMember::method("matchAll", Some(K::Object)),
    ApparentMember::method("normalize", Some(K::String)),
    ApparentMember::method("padEnd", Some(K::String)),
    ApparentMember::method("padStart", Some(K::String)),
    ApparentMember::method("repeat", Some(K::String)),
    ApparentMember::method("replace", Some(K::String)),
    ApparentMember::method("replaceAll", Some(K::String)),
    ApparentMember::method("search", Some(K::Number)),
    ApparentMember::method("slice", Some(K::String)),
    ApparentMember::method("split", Some(K::Array)),
    ApparentMember::method("startsWith", Some(K::Boolean)),
    ApparentMember::method("substring", Some(K::String)),
    ApparentMember::method("toLocaleLowerCase", Some(K::String)),
    ApparentMember::method("toLocaleUpperCase", Some(K::String)),
    ApparentMember::method("toLowerCase", Some(K::String)),
    ApparentMember::method("toString", Some(K::String)),
    ApparentMember::method("toUpperCase", Some(K::String)),
    ApparentMember::method("trim", Some(K::String)),
    ApparentMember::method("trimEnd", Some(K::String)),
    ApparentMember::method("trimStart", Some(K::String)),
    ApparentMember::method("valueOf", Some(K::String)),
];

const NUMBER_MEMBERS: &[ApparentMember] = &[
    ApparentMember::method("toExponential", Some(K::String)),
    ApparentMember::method("toFixed", Some(K::String)),
    ApparentMember::method("toLocaleString", Some(K::String)),
    ApparentMember::method("toPrecision", Some(K::String)),
    ApparentMember::method("toString", Some(K::String)),
    ApparentMember::method("valueOf", Some(K::Number)),
];

const BOOLEAN_MEMBERS: &[ApparentMember] = &[
    ApparentMember::method("toString", Some(K::String)),
    ApparentMember::method("valueOf", Some(K::Boolean)),
];

const ARRAY_MEMBERS: &[ApparentMember] = &[
    ApparentMember::method("at", None),
    ApparentMember::method("concat", Some(K::Array)),
    ApparentMember::method("every", Some(K::Boolean)),
    ApparentMember::method("filter", Some(K::Array)),
    ApparentMember::method("find", None),
    ApparentMember::method("findIndex", Some(K::Number)),
    ApparentMember::method("flat", Some(K::Array)),
    ApparentMember::method("flatMap", Some(K::Array)),
    ApparentMember::method("forEach", Some(K::Undefined)),
    ApparentMember::method("includes", Some(K::Boolean)),
    ApparentMember::method("indexOf", Some(K::Number)),
    ApparentMember::method("join", Some(K::String)),
    ApparentMember::method("lastIndexOf", Some(K::Number)),
    ApparentMember::value("length", K::Number),
    ApparentMember::method("map", Some(K::Array)),
    ApparentMember::method("pop", None),
    ApparentMember::method("push", Some(K::Number)),
    ApparentMember::method("reduce", None),
    ApparentMember::method("reverse", Some(K::Array)),
    ApparentMember::method("shift", None),
    ApparentMember::method("slice", Some(K::Array)),
    ApparentMember::method("some", Some(K::Boolean)),
    ApparentMember::method("sort", Some(K::Array)),
    ApparentMember::method("splice", Some(K::Array)),
    ApparentMember::method("toString", Some(K::String)),
    ApparentMember::method("unshift", Some(K::Number)),
];

const FUNCTION_MEMBERS: &[ApparentMember] = &[
    ApparentMember::method("apply", None),
    ApparentMember::method("bind", Some(K::Function)),
    ApparentMember::method("call", None),
    ApparentMember::value("length", K::Number),
    ApparentMember::value("name", K::String),
    ApparentMember::value("prototype", K::Object),
    ApparentMember::method("toString", Some(K::String)),
];

/// Built-in members offered for values of `kind`, in canonical order.
///
/// Plain objects have none: only their own properties are enumerable.
pub fn apparent_members(kind: ValueKind) -> &'static [ApparentMember] {
    match kind {
        ValueKind::String => STRING_MEMBERS,
        ValueKind::Number => NUMBER_MEMBERS,
        ValueKind::Boolean => BOOLEAN_MEMBERS,
        ValueKind::Array => ARRAY_MEMBERS,
        ValueKind::Function => FUNCTION_MEMBERS,
        ValueKind::Undefined | ValueKind::Null | ValueKind::Object => &[],
    }
}

type MemberIndex = FxHashMap<ValueKind, FxHashMap<&'static str, ApparentMember>>;

static APPARENT_INDEX: Lazy<MemberIndex> = Lazy::new(|| {
    let kinds = [
        ValueKind::String,
        ValueKind::Number,
        ValueKind::Boolean,
        ValueKind::Array,
        ValueKind::Function,
    ];
    kinds
        .into_iter()
        .map(|kind| {
            let members = apparent_members(kind)
                .iter()
                .map(|member| (member.name, *member))
                .collect();
            (kind, members)
        })
        .collect()
});

/// Find a built-in member of `kind` by name.
pub fn apparent_member(kind: ValueKind, name: &str) -> Option<ApparentMember> {
    APPARENT_INDEX.get(&kind)?.get(name).copied()
}

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod value_tests;
