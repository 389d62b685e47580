// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Environment variable interpolation for configuration files.
//!
//! Values are substituted with POSIX-style syntax before the text is parsed:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - variable with a default used when unset or empty
//!
//! Substitution is a single pass. Values are inserted verbatim and never
//! expanded again.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::env;

/// Upper bound on the interpolated text, in bytes.
const MAX_INTERPOLATED_LENGTH: usize = 1_000_000;

lazy_static! {
    /// Group 1 is the variable name, group 3 the default value if present.
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}").expect("Invalid regex pattern");
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Environment variable '{name}' is not valid unicode")]
    InvalidUnicode { name: String },

    #[error("Interpolated config exceeds {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Replace every `${...}` reference in `input` with its environment value.
///
/// ```
/// use widget_api::config::env_interpolation::interpolate;
///
/// std::env::remove_var("WIDGET_API_DOC_PORT");
/// let result = interpolate("port: ${WIDGET_API_DOC_PORT:-9000}").unwrap();
/// assert_eq!(result, "port: 9000");
/// ```
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;
    let mut used = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        result.push_str(&input[last_end..whole.start()]);
        result.push_str(&resolve(name.as_str(), &caps)?);
        last_end = whole.end();
        used.push(name.as_str());

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }
    result.push_str(&input[last_end..]);

    if result.len() > MAX_INTERPOLATED_LENGTH {
        return Err(InterpolationError::ResultTooLarge);
    }

    // Names only, values may be secrets.
    if !used.is_empty() {
        debug!("Interpolated environment variables: {}", used.join(", "));
    }

    Ok(result)
}

fn resolve(name: &str, caps: &Captures<'_>) -> Result<String, InterpolationError> {
    let default = caps.get(3).map(|m| m.as_str());
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => default
            .map(str::to_string)
            .ok_or_else(|| InterpolationError::MissingVariable {
                name: name.to_string(),
            }),
        Err(env::VarError::NotUnicode(_)) => Err(InterpolationError::InvalidUnicode {
            name: name.to_string(),
        }),
    }
}
