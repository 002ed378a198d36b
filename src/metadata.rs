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

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::element::class::ClassElement;
use crate::element::parameter::ParameterElement;
use crate::element::{Element, TypedElement};
use crate::error::WhiskerError;

/// ===============================================
/// Serialized Element Forms
/// ===============================================

/// Serialized form of a class descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetadata {
    pub name: String,
    pub simple_name: String,
    pub package: String,
    pub primitive: bool,
}

impl ClassMetadata {
    pub fn from_class(class: &ClassElement) -> Self {
        Self {
            name: class.name().to_string(),
            simple_name: class.simple_name().to_string(),
            package: class.package_name().to_string(),
            primitive: class.is_primitive(),
        }
    }
}

/// Serialized form of one parameter element.
///
/// The description uses the fully qualified type form so downstream
/// tooling never has to disambiguate simple names.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterMetadata {
    pub kind: &'static str,
    pub name: String,
    pub class: ClassMetadata,
    pub description: String,
}

impl ParameterMetadata {
    pub fn from_element(element: &dyn ParameterElement) -> Self {
        Self {
            kind: "parameter",
            name: element.name().to_string(),
            class: ClassMetadata::from_class(element.class()),
            description: element.description(false),
        }
    }
}

/// ===============================================
/// Metadata Documents
/// ===============================================

/// A timestamped document describing a set of parameter elements,
/// ready for ahead-of-time tooling to consume.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataDocument {
    /// RFC 3339 UTC timestamp of when the document was generated.
    pub generated: String,

    pub parameters: Vec<ParameterMetadata>,
}

impl MetadataDocument {
    /// Captures the given elements into a new document, stamped with
    /// the current UTC time.
    pub fn new(elements: &[&dyn ParameterElement]) -> Self {
        Self {
            generated: Utc::now().to_rfc3339(),
            parameters: elements
                .iter()
                .map(|element| ParameterMetadata::from_element(*element))
                .collect(),
        }
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, WhiskerError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| WhiskerError::metadata_error(err.to_string()))
    }

    /// Writes the JSON document to disk.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), WhiskerError> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json).map_err(|err| {
            WhiskerError::io_error(format!(
                "failed to write metadata to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::parameter;
    use crate::value::Value;

    #[test]
    fn parameter_metadata_mirrors_the_element() {
        let element = parameter::of_native(&Value::Number(1.0), "count").unwrap();
        let metadata = ParameterMetadata::from_element(&element);

        assert_eq!(metadata.kind, "parameter");
        assert_eq!(metadata.name, "count");
        assert_eq!(metadata.class.name, "pawx.core.Number");
        assert_eq!(metadata.class.simple_name, "Number");
        assert_eq!(metadata.class.package, "pawx.core");
        assert!(metadata.class.primitive);
        assert_eq!(metadata.description, "pawx.core.Number count");
    }

    #[test]
    fn documents_serialize_to_json() {
        let count = parameter::of_native(&Value::Number(1.0), "count").unwrap();
        let label = parameter::of_native(&Value::String("x".to_string()), "label").unwrap();
        let elements: [&dyn ParameterElement; 2] = [&count, &label];

        let document = MetadataDocument::new(&elements);
        assert!(!document.generated.is_empty());

        let json = document.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["parameters"][0]["name"], "count");
        assert_eq!(parsed["parameters"][1]["class"]["simple_name"], "String");
        assert_eq!(
            parsed["parameters"][1]["description"],
            "pawx.core.String label"
        );
    }

    #[test]
    fn documents_round_trip_through_disk() {
        let flag = parameter::of_native(&Value::Bool(true), "flag").unwrap();
        let elements: [&dyn ParameterElement; 1] = [&flag];
        let document = MetadataDocument::new(&elements);

        let path = std::env::temp_dir().join("whisker-metadata-test.json");
        document.write(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["parameters"][0]["description"], "pawx.core.Bool flag");

        fs::remove_file(&path).unwrap();
    }
}
