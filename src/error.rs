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

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct WhiskerError {
    /// Stable error code (E_ARGUMENT, E_METADATA, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl WhiskerError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Contract violation: a required factory argument is missing.
    ///
    /// The message names the offending argument so the caller can tell
    /// which input was absent.
    pub fn missing_argument(argument: &str) -> Self {
        Self::new(
            "E_ARGUMENT",
            format!("required argument `{}` is missing", argument),
        )
    }

    /// Metadata serialization failure.
    pub fn metadata_error(message: impl Into<String>) -> Self {
        Self::new("E_METADATA", message)
    }

    /// Metadata file I/O failure.
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new("E_IO", message)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for WhiskerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for WhiskerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_names_the_argument() {
        let error = WhiskerError::missing_argument("name");
        assert_eq!(error.code, "E_ARGUMENT");
        assert!(error.message.contains("`name`"));
        assert!(error.help.is_none());
    }

    #[test]
    fn with_help_attaches_a_hint() {
        let error = WhiskerError::missing_argument("type").with_help("resolve the class first");
        assert_eq!(error.help.as_deref(), Some("resolve the class first"));
    }

    #[test]
    fn display_includes_code_and_message() {
        let error = WhiskerError::new("E_METADATA", "bad document");
        assert_eq!(error.to_string(), "[E_METADATA] bad document");
    }
}
