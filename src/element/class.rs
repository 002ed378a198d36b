/*
 * ==========================================================================
 * WHISKER - Introspection with Claws! 🐾
 * ==========================================================================
 *
 * File:     class.rs
 * Purpose:  Defines the `ClassElement` type descriptor
 *
 * This file defines:
 *  - ClassElement (qualified + simple type names, primitive flag)
 *  - Reflective class resolution from native runtime values
 *
 * Class elements are produced by:
 *  - element/parameter.rs (reflective factory)
 *  - callers that resolve types ahead of element construction
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * GitHub:   https://github.com/samwilcox/whisker
 *
 * License:
 * This file is part of the WHISKER runtime introspection project.
 *
 * WHISKER is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *     https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::value::Value;

/// Namespace all builtin runtime types live under.
const CORE_PACKAGE: &str = "pawx.core";

/// Describes a PAWX type by name.
///
/// An immutable value-like descriptor: once built it never changes, and
/// equal descriptors compare equal regardless of how they were resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassElement {
    /// Fully qualified name, e.g. `pawx.core.Number`
    name: String,

    /// Unqualified name, e.g. `Number`
    simple_name: String,

    /// Whether this is one of the primitive scalar types
    primitive: bool,
}

impl ClassElement {
    /// Resolves the class of a native runtime value.
    ///
    /// Resolution is total: every value has a class.
    /// - Builtin values resolve to their runtime type under the
    ///   `pawx.core` namespace.
    /// - A `Class` value is a type handle and resolves to the class it
    ///   names, qualified by its module path when one is present.
    /// - An `Instance` resolves to its class by name.
    pub fn of(value: &Value) -> ClassElement {
        match value {
            Value::Class { name, module } => {
                let qualified = match module {
                    Some(module) => format!("{}.{}", module, name),
                    None => name.clone(),
                };
                ClassElement {
                    name: qualified,
                    simple_name: name.clone(),
                    primitive: false,
                }
            }

            Value::Instance { class_name, .. } => ClassElement {
                name: class_name.clone(),
                simple_name: class_name.clone(),
                primitive: false,
            },

            other => Self::builtin(other.type_name()),
        }
    }

    /// Builds a class element from a dotted qualified name.
    ///
    /// The simple name is the final segment. Primitive classification
    /// applies only to the core scalar types.
    pub fn of_name(qualified: &str) -> ClassElement {
        let simple = qualified.rsplit('.').next().unwrap_or(qualified);
        let package = match qualified.rfind('.') {
            Some(idx) => &qualified[..idx],
            None => "",
        };
        ClassElement {
            name: qualified.to_string(),
            simple_name: simple.to_string(),
            primitive: package == CORE_PACKAGE && is_primitive_name(simple),
        }
    }

    fn builtin(type_name: &str) -> ClassElement {
        ClassElement {
            name: format!("{}.{}", CORE_PACKAGE, type_name),
            simple_name: type_name.to_string(),
            primitive: is_primitive_name(type_name),
        }
    }

    /// Fully qualified name (e.g. `pawx.core.Number`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unqualified name (e.g. `Number`).
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Package portion of the qualified name, empty when the class is
    /// unqualified.
    pub fn package_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// Whether this class is one of the primitive scalars.
    pub fn is_primitive(&self) -> bool {
        self.primitive
    }
}

/// The runtime's primitive scalars, matching the value model.
fn is_primitive_name(simple: &str) -> bool {
    matches!(simple, "Number" | "String" | "Bool" | "Null")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[test]
    fn builtins_resolve_under_the_core_namespace() {
        let class = ClassElement::of(&Value::Number(7.0));
        assert_eq!(class.name(), "pawx.core.Number");
        assert_eq!(class.simple_name(), "Number");
        assert_eq!(class.package_name(), "pawx.core");
        assert!(class.is_primitive());
    }

    #[test]
    fn only_scalars_are_primitive() {
        assert!(ClassElement::of(&Value::Null).is_primitive());
        assert!(ClassElement::of(&Value::Bool(true)).is_primitive());
        assert!(!ClassElement::of(&Value::Tuple(vec![])).is_primitive());
        assert!(!ClassElement::of(&Value::Array {
            values: Rc::new(RefCell::new(vec![])),
        })
        .is_primitive());
    }

    #[test]
    fn class_handles_qualify_by_module_path() {
        let exported = Value::Class {
            name: "Shelter".to_string(),
            module: Some("pawx.adoption".to_string()),
        };
        let class = ClassElement::of(&exported);
        assert_eq!(class.name(), "pawx.adoption.Shelter");
        assert_eq!(class.simple_name(), "Shelter");
        assert_eq!(class.package_name(), "pawx.adoption");
        assert!(!class.is_primitive());
    }

    #[test]
    fn script_local_classes_have_no_package() {
        let local = Value::Class {
            name: "Cat".to_string(),
            module: None,
        };
        let class = ClassElement::of(&local);
        assert_eq!(class.name(), "Cat");
        assert_eq!(class.simple_name(), "Cat");
        assert_eq!(class.package_name(), "");
    }

    #[test]
    fn instances_resolve_to_their_class() {
        let instance = Value::Instance {
            class_name: "Cat".to_string(),
            fields: Rc::new(RefCell::new(HashMap::new())),
        };
        let class = ClassElement::of(&instance);
        assert_eq!(class.simple_name(), "Cat");
        assert!(!class.is_primitive());
    }

    #[test]
    fn of_name_splits_on_the_final_dot() {
        let class = ClassElement::of_name("pawx.core.String");
        assert_eq!(class.simple_name(), "String");
        assert!(class.is_primitive());

        let bare = ClassElement::of_name("Cat");
        assert_eq!(bare.simple_name(), "Cat");
        assert_eq!(bare.package_name(), "");
        assert!(!bare.is_primitive());

        // A non-core "Number" is not a primitive.
        assert!(!ClassElement::of_name("my.module.Number").is_primitive());
    }

    #[test]
    fn equal_values_resolve_to_equal_classes() {
        assert_eq!(
            ClassElement::of(&Value::String("a".to_string())),
            ClassElement::of(&Value::String("b".to_string()))
        );
        assert_eq!(
            ClassElement::of(&Value::Number(1.0)),
            ClassElement::of_name("pawx.core.Number")
        );
    }
}
