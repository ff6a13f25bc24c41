//! Object graph standing in for a browser global environment.
//!
//! Objects live in an arena owned by the [`Realm`] and are addressed by [`ObjectId`]. Each object
//! has a class name (what `Object.prototype.toString` reports), an insertion-ordered property
//! table, an optional `[[Prototype]]` link used for member lookup, and an optional call behaviour.

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};

use crate::builtins;
use crate::error::RuntimeError;
use crate::value::{ObjectId, Value};

/// What happens when a function object is invoked with no arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Callable {
    /// Host function with an unmodelled result; calling it yields `undefined`.
    Native,
    /// Always returns `returns`, e.g. a representative library instance.
    Factory { returns: Value },
    /// Always throws `message`.
    Throws { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectData {
    pub class: String,
    pub proto: Option<ObjectId>,
    pub properties: IndexMap<String, Value>,
    pub call: Option<Callable>,
}

impl ObjectData {
    pub fn new(class: impl Into<String>, proto: Option<ObjectId>) -> Self {
        Self {
            class: class.into(),
            proto,
            properties: IndexMap::new(),
            call: None,
        }
    }

    pub fn with_call(mut self, call: Callable) -> Self {
        self.call = Some(call);
        self
    }

    pub fn is_callable(&self) -> bool {
        self.call.is_some()
    }
}

/// Arena storage shared by the realm and the builtin installers.
#[derive(Debug, Clone, Default)]
pub(crate) struct Heap {
    objects: Vec<ObjectData>,
}

impl Heap {
    pub(crate) fn alloc(&mut self, data: ObjectData) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(data);
        id
    }

    pub(crate) fn get(&self, id: ObjectId) -> Option<&ObjectData> {
        self.objects.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Option<&mut ObjectData> {
        self.objects.get_mut(id.index())
    }

    pub(crate) fn set(&mut self, id: ObjectId, name: &str, value: Value) {
        if let Some(object) = self.get_mut(id) {
            object.properties.insert(name.to_string(), value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.objects.len()
    }
}

/// Objects every realm carries regardless of its global namespace.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Intrinsics {
    pub(crate) object_prototype: ObjectId,
    pub(crate) function_prototype: ObjectId,
    pub(crate) object: ObjectId,
    pub(crate) function: ObjectId,
    pub(crate) array: ObjectId,
    pub(crate) array_prototype: ObjectId,
    pub(crate) string: ObjectId,
    pub(crate) string_prototype: ObjectId,
    pub(crate) number: ObjectId,
    pub(crate) number_prototype: ObjectId,
    pub(crate) boolean: ObjectId,
    pub(crate) boolean_prototype: ObjectId,
    pub(crate) document_constructor: ObjectId,
    pub(crate) document: ObjectId,
}

#[derive(Debug, Clone)]
pub struct Realm {
    heap: Heap,
    global: ObjectId,
    intrinsics: Intrinsics,
}

static STANDARD: LazyLock<Realm> = LazyLock::new(Realm::standard);

/// The process-wide browser-like realm, built on first use.
pub fn standard_realm() -> &'static Realm {
    &STANDARD
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl Realm {
    /// A realm with intrinsics but an empty global namespace.
    pub fn new() -> Self {
        let mut heap = Heap::default();
        let intrinsics = builtins::intrinsics(&mut heap);
        let global = heap.alloc(ObjectData::new(
            "Object",
            Some(intrinsics.object_prototype),
        ));
        Self {
            heap,
            global,
            intrinsics,
        }
    }

    /// A realm whose global namespace resembles a browser `window`.
    pub fn standard() -> Self {
        let mut realm = Self::new();
        builtins::install_globals(&mut realm);
        tracing::debug!(objects = realm.heap.len(), "standard realm installed");
        realm
    }

    pub fn global(&self) -> ObjectId {
        self.global
    }

    pub(crate) fn intrinsics(&self) -> Intrinsics {
        self.intrinsics
    }

    pub(crate) fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn object(&self, id: ObjectId) -> Option<&ObjectData> {
        self.heap.get(id)
    }

    pub fn alloc(&mut self, data: ObjectData) -> ObjectId {
        self.heap.alloc(data)
    }

    pub fn set(&mut self, id: ObjectId, name: &str, value: impl Into<Value>) {
        self.heap.set(id, name, value.into());
    }

    pub fn define_global(&mut self, name: &str, value: impl Into<Value>) {
        self.heap.set(self.global, name, value.into());
    }

    /// `{}` inheriting from `Object.prototype`.
    pub fn plain_object(&mut self) -> ObjectId {
        self.alloc(ObjectData::new(
            "Object",
            Some(self.intrinsics.object_prototype),
        ))
    }

    /// An array with index properties and `length`.
    pub fn array(&mut self, items: Vec<Value>) -> ObjectId {
        let id = self.alloc(ObjectData::new(
            "Array",
            Some(self.intrinsics.array_prototype),
        ));
        let len = items.len();
        for (idx, item) in items.into_iter().enumerate() {
            self.heap.set(id, &idx.to_string(), item);
        }
        self.heap.set(id, "length", Value::Number(len as f64));
        id
    }

    /// A function object named `name`.
    pub fn function(&mut self, name: &str, call: Callable) -> ObjectId {
        let id = self.alloc(
            ObjectData::new("Function", Some(self.intrinsics.function_prototype)).with_call(call),
        );
        self.heap.set(id, "length", Value::Number(0.0));
        self.heap.set(id, "name", Value::string(name));
        id
    }

    /// A function that returns `returns` every time it is called.
    pub fn factory(&mut self, name: &str, returns: impl Into<Value>) -> ObjectId {
        self.function(
            name,
            Callable::Factory {
                returns: returns.into(),
            },
        )
    }

    pub fn global_value(&self, name: &str) -> Value {
        self.get(&Value::Object(self.global), name)
    }

    /// The `String` constructor, used as the stand-in for string literals.
    pub fn string_constructor(&self) -> Value {
        Value::Object(self.intrinsics.string)
    }

    pub fn document(&self) -> Value {
        Value::Object(self.intrinsics.document)
    }

    /// `base[name]`: own property first, then the `[[Prototype]]` chain. Primitives read
    /// through their wrapper prototype.
    pub fn get(&self, base: &Value, name: &str) -> Value {
        let start = match base {
            Value::Undefined | Value::Null => return Value::Undefined,
            Value::Object(id) => *id,
            Value::String(s) => {
                if name == "length" {
                    return Value::Number(s.encode_utf16().count() as f64);
                }
                self.intrinsics.string_prototype
            }
            Value::Number(_) => self.intrinsics.number_prototype,
            Value::Bool(_) => self.intrinsics.boolean_prototype,
        };

        let mut current = Some(start);
        let mut steps = 0;
        while let Some(id) = current {
            let Some(object) = self.heap.get(id) else {
                break;
            };
            if let Some(value) = object.properties.get(name) {
                return value.clone();
            }
            steps += 1;
            if steps > self.heap.len() {
                break;
            }
            current = object.proto;
        }
        Value::Undefined
    }

    /// Calls `callee` with no arguments.
    pub fn invoke(&self, callee: &Value) -> Result<Value, RuntimeError> {
        let call = callee
            .as_object()
            .and_then(|id| self.heap.get(id))
            .and_then(|object| object.call.as_ref());

        match call {
            Some(Callable::Native) => Ok(Value::Undefined),
            Some(Callable::Factory { returns }) => Ok(returns.clone()),
            Some(Callable::Throws { message }) => Err(RuntimeError::Thrown(message.clone())),
            None => Err(RuntimeError::NotCallable(self.describe(callee))),
        }
    }

    pub fn is_callable(&self, value: &Value) -> bool {
        value
            .as_object()
            .and_then(|id| self.heap.get(id))
            .is_some_and(ObjectData::is_callable)
    }

    /// The document singleton or the `Document` constructor.
    pub fn is_document(&self, value: &Value) -> bool {
        matches!(
            value.as_object(),
            Some(id) if id == self.intrinsics.document || id == self.intrinsics.document_constructor
        )
    }

    /// Own property names of `value`, then of each object reached through its `prototype`
    /// property. Primitives list their own names followed by their wrapper prototype.
    ///
    /// The document singleton and the `Document` constructor both list the union of the two
    /// chains, instance first.
    pub fn property_names(&self, value: &Value) -> Vec<String> {
        let mut names = IndexSet::new();
        match value {
            Value::Undefined | Value::Null => {}
            Value::Object(_) if self.is_document(value) => {
                self.collect_prototype_chain(self.intrinsics.document, &mut names);
                self.collect_prototype_chain(self.intrinsics.document_constructor, &mut names);
            }
            Value::Object(id) => self.collect_prototype_chain(*id, &mut names),
            Value::String(_) => {
                names.insert("length".to_string());
                self.collect_prototype_chain(self.intrinsics.string_prototype, &mut names);
            }
            Value::Number(_) => {
                self.collect_prototype_chain(self.intrinsics.number_prototype, &mut names)
            }
            Value::Bool(_) => {
                self.collect_prototype_chain(self.intrinsics.boolean_prototype, &mut names)
            }
        }
        names.into_iter().collect()
    }

    fn collect_prototype_chain(&self, start: ObjectId, names: &mut IndexSet<String>) {
        let mut visited = IndexSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            let Some(object) = self.heap.get(id) else {
                break;
            };
            names.extend(object.properties.keys().cloned());
            current = object.properties.get("prototype").and_then(Value::as_object);
        }
    }

    /// `Object.prototype.toString` class name: `Number`, `String`, `Array`, `Null`, ...
    pub fn type_tag(&self, value: &Value) -> String {
        match value {
            Value::Undefined => "Undefined".to_string(),
            Value::Null => "Null".to_string(),
            Value::Bool(_) => "Boolean".to_string(),
            Value::Number(_) => "Number".to_string(),
            Value::String(_) => "String".to_string(),
            Value::Object(id) => self
                .heap
                .get(*id)
                .map(|object| object.class.clone())
                .unwrap_or_else(|| "Object".to_string()),
        }
    }

    fn describe(&self, value: &Value) -> String {
        match value {
            Value::Object(_) => match self.get(value, "name") {
                Value::String(name) if !name.is_empty() => name,
                _ => self.type_tag(value),
            },
            other => self.type_tag(other).to_lowercase(),
        }
    }
}
