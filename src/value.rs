/*
 * ==========================================================================
 * WHISKER - Introspection with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/whisker
 *
 * License:
 * This file is part of the WHISKER runtime introspection project.
 *
 * WHISKER is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use regex::Regex;

/// PAWX runtime value representation, as seen by the element layer.
///
/// These are the native handles WHISKER introspects. Every reflective
/// factory in this crate starts from one of these. WHISKER describes
/// structure, it does not execute it, so the variants carry only the
/// shape the runtime exposes, not method tables or prototypes.
pub enum Value {
    // Primitive scalars
    Number(f64),
    String(String),
    Bool(bool),
    Null,

    // Native host function:
    // takes a vector of values → returns a value
    NativeFunction(Arc<dyn Fn(Vec<Value>) -> Value>),

    // Dynamic array (JS-style)
    // - Shared across copies using Rc<RefCell<_>>
    Array {
        values: Rc<RefCell<Vec<Value>>>,
    },

    // Plain object:
    // - Shared mutable field map
    Object {
        fields: Rc<RefCell<HashMap<String, Value>>>,
    },

    // Class object:
    // `module` is the dotted module path the class was exported from.
    // Script-local classes carry no module path.
    Class {
        name: String,
        module: Option<String>,
    },

    // Instance of a class:
    Instance {
        class_name: String,
        fields: Rc<RefCell<HashMap<String, Value>>>,
    },

    // Error wrapper used by the runtime and Error() constructor
    Error {
        message: String,
    },

    // Module value produced by tap()
    Module {
        exports: HashMap<String, Value>,
        default: Option<Box<Value>>,
    },

    // Tuple literal
    Tuple(Vec<Value>),

    // Regex literal / constructed regex
    Regex(Regex),
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::String(s) => Value::String(s.clone()),
            Value::Bool(b) => Value::Bool(*b),
            Value::Null => Value::Null,

            Value::NativeFunction(f) => Value::NativeFunction(f.clone()),

            Value::Array { values } => Value::Array {
                values: values.clone(),
            },

            Value::Object { fields } => Value::Object {
                fields: fields.clone(),
            },

            Value::Class { name, module } => Value::Class {
                name: name.clone(),
                module: module.clone(),
            },

            Value::Instance { class_name, fields } => Value::Instance {
                class_name: class_name.clone(),
                fields: fields.clone(),
            },

            Value::Error { message } => Value::Error {
                message: message.clone(),
            },

            Value::Module { exports, default } => Value::Module {
                exports: exports.clone(),
                default: default.clone(),
            },

            Value::Tuple(values) => Value::Tuple(values.clone()),

            Value::Regex(r) => Value::Regex(r.clone()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({})", s),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Null => write!(f, "Null"),

            Value::NativeFunction(_) => write!(f, "[NativeFunction]"),

            Value::Regex(r) => write!(f, "[Regex /{}/]", r.as_str()),

            Value::Object { .. } => write!(f, "[Object]"),

            Value::Array { values } => write!(f, "[Array len={}]", values.borrow().len()),

            Value::Class { name, .. } => write!(f, "[Class {}]", name),

            Value::Instance { class_name, .. } => write!(f, "[Instance {}]", class_name),

            Value::Module { exports, default } => {
                let default_str = if default.is_some() { " + default" } else { "" };
                write!(f, "[Module {} exports{}]", exports.len(), default_str)
            }

            Value::Error { message } => write!(f, "Error({})", message),

            Value::Tuple(values) => write!(f, "[Tuple {:?}]", values),
        }
    }
}

impl Value {
    /// Returns a stable type name string (useful for errors and
    /// reflective class resolution).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_)         => "Number",
            Value::String(_)         => "String",
            Value::Bool(_)           => "Bool",
            Value::Null              => "Null",
            Value::Array { .. }      => "Array",
            Value::Object { .. }     => "Object",
            Value::Tuple(_)          => "Tuple",
            Value::Class { .. }      => "Class",
            Value::Instance { .. }   => "Instance",
            Value::NativeFunction(_) => "Function",
            Value::Error { .. }      => "Error",
            Value::Module { .. }     => "Module",
            Value::Regex(_)          => "Regex",
        }
    }

    /// Human-ish string form for debug/errors (NOT meant to be exact serialization).
    pub fn stringify(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),

            Value::Regex(r) => format!("/{}/", r.as_str()),

            Value::Tuple(v) => {
                let inner = v.iter().map(|x| x.stringify()).collect::<Vec<_>>().join(", ");
                format!("({})", inner)
            }

            Value::Array { values } => {
                let inner = values
                    .borrow()
                    .iter()
                    .map(|x| x.stringify())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}]", inner)
            }

            Value::Object { .. } => "[object Object]".to_string(),
            Value::NativeFunction(_) => "[function]".to_string(),
            Value::Class { name, .. } => format!("[class {}]", name),
            Value::Instance { class_name, .. } => format!("[instance {}]", class_name),
            Value::Module { .. } => "[module]".to_string(),
            Value::Error { message } => format!("Error({})", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_stable() {
        assert_eq!(Value::Number(1.0).type_name(), "Number");
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(
            Value::Class {
                name: "Cat".to_string(),
                module: None,
            }
            .type_name(),
            "Class"
        );
        assert_eq!(
            Value::NativeFunction(Arc::new(|_| Value::Null)).type_name(),
            "Function"
        );
        assert_eq!(Value::Tuple(vec![]).type_name(), "Tuple");
    }

    #[test]
    fn stringify_covers_compound_forms() {
        let tuple = Value::Tuple(vec![Value::Number(1.0), Value::String("a".to_string())]);
        assert_eq!(tuple.stringify(), "(1, a)");

        let array = Value::Array {
            values: Rc::new(RefCell::new(vec![Value::Bool(true), Value::Null])),
        };
        assert_eq!(array.stringify(), "[true, null]");

        let instance = Value::Instance {
            class_name: "Cat".to_string(),
            fields: Rc::new(RefCell::new(HashMap::new())),
        };
        assert_eq!(instance.stringify(), "[instance Cat]");
    }

    #[test]
    fn clones_share_array_storage() {
        let array = Value::Array {
            values: Rc::new(RefCell::new(vec![Value::Number(1.0)])),
        };
        let copy = array.clone();

        if let Value::Array { values } = &array {
            values.borrow_mut().push(Value::Number(2.0));
        }
        if let Value::Array { values } = &copy {
            assert_eq!(values.borrow().len(), 2);
        } else {
            panic!("expected array clone");
        }
    }

    #[test]
    fn debug_forms_are_compact() {
        let regex = Value::Regex(Regex::new("[0-9]+").unwrap());
        assert_eq!(format!("{:?}", regex), "[Regex /[0-9]+/]");
        assert_eq!(format!("{:?}", Value::Number(2.5)), "Number(2.5)");
    }
}
