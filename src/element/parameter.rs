/*
 * ==========================================================================
 * WHISKER - Introspection with Claws!
 * ==========================================================================
 *
 * File:     parameter.rs
 * Purpose:  Defines the parameter element capability and its factories
 *
 * This file defines:
 *  - ParameterElement (the capability)
 *  - ReflectParameterElement (the concrete descriptor)
 *  - The `of` / `of_native` construction helpers
 *
 * Parameter elements describe one declared parameter of a function,
 * method, or constructor as an immutable (class, name) pair.
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

use crate::element::class::ClassElement;
use crate::element::{describe_typed, Element, TypedElement};
use crate::error::WhiskerError;
use crate::value::Value;

/// Capability describing a single formal parameter.
///
/// A parameter element always describes itself as `"<type> <name>"`,
/// using the simple or fully qualified type form.
pub trait ParameterElement: TypedElement {}

/// Concrete parameter element produced by the factories below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectParameterElement {
    class: ClassElement,
    name: String,
}

impl ReflectParameterElement {
    pub(crate) fn new(class: ClassElement, name: String) -> Self {
        Self { class, name }
    }
}

impl Element for ReflectParameterElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self, simple: bool) -> String {
        describe_typed(self, simple)
    }
}

impl TypedElement for ReflectParameterElement {
    fn class(&self) -> &ClassElement {
        &self.class
    }
}

impl ParameterElement for ReflectParameterElement {}

/// Builds a parameter element from an already-resolved class and a name.
///
/// The class arrives as an `Option` because call-sites usually assemble
/// elements from declaration data whose type annotation may be absent.
/// Both arguments are still required: an empty `name` or a `None` class
/// is a contract violation, reported with an `E_ARGUMENT` error that
/// names the missing argument. The checks are independent, name first.
pub fn of(
    class: Option<ClassElement>,
    name: impl Into<String>,
) -> Result<ReflectParameterElement, WhiskerError> {
    let name = name.into();
    if name.is_empty() {
        return Err(
            WhiskerError::missing_argument("name").with_help("pass a non-empty parameter name")
        );
    }
    let class = match class {
        Some(class) => class,
        None => {
            return Err(WhiskerError::missing_argument("type")
                .with_help("resolve the parameter's class before building the element"));
        }
    };
    Ok(ReflectParameterElement::new(class, name))
}

/// Builds a parameter element for a native runtime value and a name.
///
/// The name is validated before any type resolution, so a missing name
/// is reported the same way for every value. The value's class is then
/// resolved reflectively; resolution is total, so no other failure is
/// possible here.
pub fn of_native(
    value: &Value,
    name: impl Into<String>,
) -> Result<ReflectParameterElement, WhiskerError> {
    let name = name.into();
    if name.is_empty() {
        return Err(
            WhiskerError::missing_argument("name").with_help("pass a non-empty parameter name")
        );
    }
    Ok(ReflectParameterElement::new(ClassElement::of(value), name))
}
