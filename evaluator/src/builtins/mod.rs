//! Builtin object tables and the installers that allocate them into a realm.
//!
//! Only names and shapes are modelled. Methods are native functions returning `undefined`;
//! data members carry a representative primitive or an empty object of the right class.

#[macro_use]
mod macros;
mod dom;
mod language;

use crate::realm::{Callable, Heap, Intrinsics, ObjectData, Realm};
use crate::value::{ObjectId, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Member {
    Method(&'static str),
    Data(&'static str, Prim),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Prim {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(&'static str),
    /// A fresh empty object of this class.
    Object(&'static str),
}

/// Allocates the intrinsic constructors, prototypes and the document singleton.
pub(crate) fn intrinsics(heap: &mut Heap) -> Intrinsics {
    let object_prototype = heap.alloc(ObjectData::new("Object", None));
    let function_prototype = heap.alloc(
        ObjectData::new("Function", Some(object_prototype)).with_call(Callable::Native),
    );
    let mut b = Builder {
        heap,
        object_prototype,
        function_prototype,
    };

    b.members(object_prototype, &language::object_prototype());
    b.members(function_prototype, &language::function_prototype());

    let object = b.constructor_for("Object", object_prototype, &language::object_statics());
    let function = b.constructor_for("Function", function_prototype, &[]);
    let (array, array_prototype) = b.constructor(
        "Array",
        "Array",
        &language::array_statics(),
        &language::array_prototype(),
    );
    let (string, string_prototype) = b.constructor(
        "String",
        "String",
        &language::string_statics(),
        &language::string_prototype(),
    );
    let (number, number_prototype) = b.constructor(
        "Number",
        "Number",
        &language::number_statics(),
        &language::number_prototype(),
    );
    let (boolean, boolean_prototype) =
        b.constructor("Boolean", "Boolean", &[], &language::boolean_prototype());

    let element_prototype = b.object("HTMLElement");
    b.members(element_prototype, &dom::element_prototype());

    let (document_constructor, document_prototype) =
        b.constructor("Document", "Document", &[], &dom::document_prototype());
    let document = b
        .heap
        .alloc(ObjectData::new("HTMLDocument", Some(document_prototype)));

    let location = b.object("Location");
    b.members(location, &dom::location());

    for &(name, class) in dom::DOCUMENT_ELEMENTS {
        let element = b
            .heap
            .alloc(ObjectData::new(class, Some(element_prototype)));
        b.heap.set(document, name, Value::Object(element));
    }
    b.heap.set(document, "location", Value::Object(location));
    b.members(document, &dom::document_instance());
    if let Value::Object(body) = get_own(b.heap, document, "body") {
        b.heap.set(document, "activeElement", Value::Object(body));
    }

    Intrinsics {
        object_prototype,
        function_prototype,
        object,
        function,
        array,
        array_prototype,
        string,
        string_prototype,
        number,
        number_prototype,
        boolean,
        boolean_prototype,
        document_constructor,
        document,
    }
}

/// Installs the browser-like global namespace into `realm`.
pub(crate) fn install_globals(realm: &mut Realm) {
    let intrinsics = realm.intrinsics();
    let global = realm.global();
    let mut b = Builder {
        heap: realm.heap_mut(),
        object_prototype: intrinsics.object_prototype,
        function_prototype: intrinsics.function_prototype,
    };

    if let Some(window) = b.heap.get_mut(global) {
        window.class = "Window".to_string();
    }

    let set = |b: &mut Builder<'_>, name: &str, id: ObjectId| {
        b.heap.set(global, name, Value::Object(id));
    };

    b.heap.set(global, "undefined", Value::Undefined);
    b.heap.set(global, "NaN", Value::Number(f64::NAN));
    b.heap.set(global, "Infinity", Value::Number(f64::INFINITY));

    set(&mut b, "Object", intrinsics.object);
    set(&mut b, "Function", intrinsics.function);
    set(&mut b, "Array", intrinsics.array);
    set(&mut b, "String", intrinsics.string);
    set(&mut b, "Number", intrinsics.number);
    set(&mut b, "Boolean", intrinsics.boolean);

    let (date, _) = b.constructor(
        "Date",
        "Date",
        &language::date_statics(),
        &language::date_prototype(),
    );
    set(&mut b, "Date", date);
    let (regexp, _) = b.constructor("RegExp", "RegExp", &[], &language::regexp_prototype());
    set(&mut b, "RegExp", regexp);
    let (error, error_prototype) =
        b.constructor("Error", "Error", &[], &language::error_prototype());
    set(&mut b, "Error", error);
    for &name in language::ERROR_SUBCLASSES {
        let (ctor, proto) = b.constructor(name, "Error", &[], &[]);
        if let Some(proto) = b.heap.get_mut(proto) {
            proto.proto = Some(error_prototype);
        }
        b.heap.set(proto, "name", Value::string(name));
        set(&mut b, name, ctor);
    }
    let (map, _) = b.constructor("Map", "Map", &[], &language::map_prototype());
    set(&mut b, "Map", map);
    let (set_ctor, _) = b.constructor("Set", "Set", &[], &language::set_prototype());
    set(&mut b, "Set", set_ctor);
    let (promise, _) = b.constructor(
        "Promise",
        "Promise",
        &language::promise_statics(),
        &language::promise_prototype(),
    );
    set(&mut b, "Promise", promise);

    let math = b.object("Math");
    b.members(math, &language::math());
    set(&mut b, "Math", math);
    let json = b.object("JSON");
    b.members(json, &language::json());
    set(&mut b, "JSON", json);
    let console = b.object("console");
    b.members(console, &dom::console());
    set(&mut b, "console", console);

    for name in ["window", "self", "globalThis"] {
        set(&mut b, name, global);
    }
    set(&mut b, "document", intrinsics.document);
    set(&mut b, "Document", intrinsics.document_constructor);
    b.heap
        .set(intrinsics.document, "defaultView", Value::Object(global));

    let navigator = b.object("Navigator");
    b.members(navigator, &dom::navigator());
    set(&mut b, "navigator", navigator);
    if let Value::Object(location) = get_own(b.heap, intrinsics.document, "location") {
        set(&mut b, "location", location);
    }

    let storage_prototype = b.object("Storage");
    b.members(storage_prototype, &dom::storage_prototype());
    for name in ["localStorage", "sessionStorage"] {
        let storage = b
            .heap
            .alloc(ObjectData::new("Storage", Some(storage_prototype)));
        set(&mut b, name, storage);
    }

    b.members(global, &dom::window_functions());
}

fn get_own(heap: &Heap, id: ObjectId, name: &str) -> Value {
    heap.get(id)
        .and_then(|object| object.properties.get(name))
        .cloned()
        .unwrap_or_default()
}

struct Builder<'a> {
    heap: &'a mut Heap,
    object_prototype: ObjectId,
    function_prototype: ObjectId,
}

impl Builder<'_> {
    /// An empty object of `class` inheriting from `Object.prototype`.
    fn object(&mut self, class: &str) -> ObjectId {
        self.heap
            .alloc(ObjectData::new(class, Some(self.object_prototype)))
    }

    fn native(&mut self, name: &str) -> ObjectId {
        let id = self.heap.alloc(
            ObjectData::new("Function", Some(self.function_prototype)).with_call(Callable::Native),
        );
        self.heap.set(id, "length", Value::Number(0.0));
        self.heap.set(id, "name", Value::string(name));
        id
    }

    fn members(&mut self, target: ObjectId, members: &[Member]) {
        for member in members {
            match *member {
                Member::Method(name) => {
                    let method = self.native(name);
                    self.heap.set(target, name, Value::Object(method));
                }
                Member::Data(name, prim) => {
                    let value = self.prim(prim);
                    self.heap.set(target, name, value);
                }
            }
        }
    }

    fn prim(&mut self, prim: Prim) -> Value {
        match prim {
            Prim::Undefined => Value::Undefined,
            Prim::Null => Value::Null,
            Prim::Bool(b) => Value::Bool(b),
            Prim::Number(n) => Value::Number(n),
            Prim::Str(s) => Value::string(s),
            Prim::Object(class) => Value::Object(self.object(class)),
        }
    }

    /// A constructor `name` whose `prototype` is the existing object `prototype`.
    fn constructor_for(&mut self, name: &str, prototype: ObjectId, statics: &[Member]) -> ObjectId {
        let ctor = self.heap.alloc(
            ObjectData::new("Function", Some(self.function_prototype)).with_call(Callable::Native),
        );
        self.heap.set(ctor, "length", Value::Number(1.0));
        self.heap.set(ctor, "name", Value::string(name));
        self.heap.set(ctor, "prototype", Value::Object(prototype));
        self.members(ctor, statics);

        // `constructor` goes first among the prototype's own names.
        if let Some(proto) = self.heap.get_mut(prototype) {
            proto
                .properties
                .shift_insert(0, "constructor".to_string(), Value::Object(ctor));
        }
        ctor
    }

    /// A constructor `name` with a fresh prototype of class `class`.
    fn constructor(
        &mut self,
        name: &str,
        class: &str,
        statics: &[Member],
        prototype_members: &[Member],
    ) -> (ObjectId, ObjectId) {
        let prototype = self.object(class);
        self.members(prototype, prototype_members);
        let ctor = self.constructor_for(name, prototype, statics);
        (ctor, prototype)
    }
}
