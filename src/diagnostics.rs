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

use crate::error::WhiskerError;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for WHISKER errors.
///
/// This printer:
/// - Formats errors with their stable error code
/// - Shows the operation that was underway when the error occurred
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for WHISKER and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Short description of the operation underway, e.g.
    /// `while building a parameter element`.
    ///
    /// Element errors carry no source location, so this context line
    /// takes the place of a file/line/column pointer.
    context: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given operation context.
    ///
    /// The parameter accepts any type convertible into `String`
    /// for ergonomic call-sites.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// This function:
    /// 1. Prints a compiler-style error header with the stable code
    /// 2. Renders the operation context on the locator line
    /// 3. Optionally prints a helpful suggestion
    ///
    /// # Output Example
    /// ```text
    /// error[E_ARGUMENT]: required argument `name` is missing
    ///   --> while building a parameter element
    ///
    /// help: pass a non-empty parameter name
    /// ```
    pub fn print(&self, error: &WhiskerError) {
        // Print the main error header, including:
        // - Stable error code
        // - Human-readable message
        eprintln!("error[{}]: {}", error.code, error.message);

        // The locator line points at the operation instead of a source
        // position.
        eprintln!("  --> {}", self.context);

        // If the error includes an optional help message,
        // display it as a follow-up suggestion.
        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }
}
