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

pub mod diagnostics;
pub mod element;
pub mod error;
pub mod metadata;
pub mod value;

pub use crate::diagnostics::DiagnosticPrinter;
pub use crate::element::class::ClassElement;
pub use crate::element::parameter::{ParameterElement, ReflectParameterElement};
pub use crate::element::{describe_typed, Element, TypedElement};
pub use crate::error::WhiskerError;
pub use crate::metadata::{ClassMetadata, MetadataDocument, ParameterMetadata};
pub use crate::value::Value;
