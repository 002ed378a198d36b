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

pub mod class;
pub mod parameter;

use crate::element::class::ClassElement;

/// Base capability: every element has a name and can describe itself.
///
/// Elements are immutable descriptors of program structure. They do not
/// own the things they describe and never mutate after construction, so
/// they are safe to share freely.
pub trait Element {
    /// The element's identifier. Never empty for elements constructed
    /// through this crate's factories.
    fn name(&self) -> &str;

    /// Human-readable description of this element.
    ///
    /// The base form is just the element's name; typed elements replace
    /// this with a `"<type> <name>"` form.
    fn description(&self, _simple: bool) -> String {
        self.name().to_string()
    }
}

/// Capability for elements that carry a type.
pub trait TypedElement: Element {
    /// The element's type descriptor. Always present, no side effects.
    fn class(&self) -> &ClassElement;
}

/// Computes the standard `"<type> <name>"` description for a typed
/// element: the type's simple name when `simple` is true, its fully
/// qualified name otherwise.
///
/// Pure function of the element's two accessors.
pub fn describe_typed(element: &dyn TypedElement, simple: bool) -> String {
    if simple {
        format!("{} {}", element.class().simple_name(), element.name())
    } else {
        format!("{} {}", element.class().name(), element.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Element for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn base_description_is_the_name() {
        let element = Named("whiskers");
        assert_eq!(element.description(true), "whiskers");
        assert_eq!(element.description(false), "whiskers");
    }

    struct Typed {
        class: ClassElement,
        name: &'static str,
    }

    impl Element for Typed {
        fn name(&self) -> &str {
            self.name
        }
    }

    impl TypedElement for Typed {
        fn class(&self) -> &ClassElement {
            &self.class
        }
    }

    #[test]
    fn describe_typed_uses_simple_and_qualified_forms() {
        let element = Typed {
            class: ClassElement::of_name("pawx.core.Number"),
            name: "count",
        };
        assert_eq!(describe_typed(&element, true), "Number count");
        assert_eq!(describe_typed(&element, false), "pawx.core.Number count");
    }
}
