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
use std::rc::Rc;

use regex::Regex;

use whisker::element::parameter;
use whisker::{ClassElement, DiagnosticPrinter, Element, MetadataDocument, ParameterElement, Value};

/// Small driver that walks a handful of native runtime values through
/// the element layer: reflective resolution, both description forms,
/// metadata emission, and a contract-violation diagnostic.
fn main() {
    let values = vec![
        ("count", Value::Number(3.0)),
        ("label", Value::String("tabby".to_string())),
        (
            "pattern",
            Value::Regex(Regex::new("^[a-z]+$").expect("valid demo pattern")),
        ),
        (
            "owner",
            Value::Instance {
                class_name: "Cat".to_string(),
                fields: Rc::new(RefCell::new(HashMap::new())),
            },
        ),
    ];

    let printer = DiagnosticPrinter::new("while building a parameter element");
    let mut elements = Vec::new();

    for (name, value) in &values {
        match parameter::of_native(value, *name) {
            Ok(element) => {
                println!(
                    "{:<16} {:<16} => {}",
                    value.stringify(),
                    element.description(true),
                    element.description(false)
                );
                elements.push(element);
            }
            Err(error) => printer.print(&error),
        }
    }

    // Exported classes qualify under their module path.
    let shelter = Value::Class {
        name: "Shelter".to_string(),
        module: Some("pawx.adoption".to_string()),
    };
    match parameter::of(Some(ClassElement::of(&shelter)), "home") {
        Ok(element) => {
            println!(
                "{:<16} {:<16} => {}",
                shelter.stringify(),
                element.description(true),
                element.description(false)
            );
            elements.push(element);
        }
        Err(error) => printer.print(&error),
    }

    // A pre-resolved annotation works just as well as a live value.
    match parameter::of(Some(ClassElement::of_name("pawx.core.Number")), "age") {
        Ok(element) => {
            println!("{:<33} => {}", element.description(true), element.description(false));
            elements.push(element);
        }
        Err(error) => printer.print(&error),
    }

    // Contract violation: a missing name is reported, never recovered.
    if let Err(error) = parameter::of_native(&Value::Null, "") {
        printer.print(&error);
    }

    let refs: Vec<&dyn ParameterElement> = elements
        .iter()
        .map(|element| element as &dyn ParameterElement)
        .collect();
    let document = MetadataDocument::new(&refs);

    let metadata_printer = DiagnosticPrinter::new("while emitting element metadata");
    match document.to_json() {
        Ok(json) => println!("\n{}", json),
        Err(error) => metadata_printer.print(&error),
    }
    if let Err(error) = document.write("whisker-metadata.json") {
        metadata_printer.print(&error);
    }
}
