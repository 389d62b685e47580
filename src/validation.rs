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

//! Request schema validation.
//!
//! Request bodies are checked against a static field table before they are
//! deserialized into a body type. This turns a missing or mistyped field into
//! a field-level error keyed by its path (e.g. `requestBody.name`) rather than
//! a single opaque decode failure.
//!
//! Path and query parameters use the same [`ValidationError`] so that every
//! schema mismatch leaves the API through one response shape.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::{Uuid, Variant, Version};

/// Path prefix used for body field errors.
pub const BODY_PREFIX: &str = "requestBody";

/// Expected JSON type of a body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string with a minimum length in characters.
    Text { min_length: usize },
    /// Any JSON number.
    Number,
}

/// One entry of a body schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// A required string field.
    pub const fn text(name: &'static str, min_length: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Text { min_length },
            required: true,
        }
    }

    /// A required numeric field.
    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
            required: true,
        }
    }

    /// The same field, but allowed to be absent.
    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// Static schema attached to a request body type.
pub trait Schema {
    const FIELDS: &'static [FieldSpec];
}

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Why the field was rejected
    pub message: String,
    /// The offending value, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(message: impl Into<String>, value: Value) -> Self {
        Self {
            message: message.into(),
            value: Some(value),
        }
    }
}

/// Field errors collected while validating a request, keyed by field path.
///
/// Serializes as a plain JSON object, e.g.
/// `{"requestBody.name": {"message": "'name' is required"}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationError {
    fields: IndexMap<String, FieldError>,
}

impl ValidationError {
    /// A validation error with exactly one failed field.
    pub fn single(field: impl Into<String>, error: FieldError) -> Self {
        let mut errors = Self::default();
        errors.insert(field, error);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.fields.insert(field.into(), error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.get(field)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Check a parsed JSON body against a schema.
///
/// Unknown properties are ignored; they are dropped when the body is
/// deserialized.
pub fn validate_body(value: &Value, fields: &[FieldSpec]) -> Result<(), ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::single(
            BODY_PREFIX,
            FieldError::with_value("invalid object", value.clone()),
        ));
    };

    let mut errors = ValidationError::default();
    for spec in fields {
        let path = format!("{BODY_PREFIX}.{}", spec.name);
        match object.get(spec.name) {
            None if spec.required => {
                errors.insert(path, FieldError::new(format!("'{}' is required", spec.name)));
            }
            None => {}
            Some(found) => {
                if let Some(message) = check_kind(spec.kind, found) {
                    errors.insert(path, FieldError::with_value(message, found.clone()));
                }
            }
        }
    }

    errors.into_result()
}

fn check_kind(kind: FieldKind, value: &Value) -> Option<String> {
    match kind {
        FieldKind::Text { min_length } => match value.as_str() {
            None => Some("invalid string value".to_string()),
            Some(text) if text.chars().count() < min_length => {
                Some(format!("minLength {min_length}"))
            }
            Some(_) => None,
        },
        FieldKind::Number => {
            if value.is_number() {
                None
            } else {
                Some("invalid float number".to_string())
            }
        }
    }
}

/// Parse a path parameter as a stringified UUIDv4.
///
/// Only the canonical lowercase hyphenated form is accepted. Other textual
/// forms (simple, braced, urn, uppercase) are rejected.
pub fn parse_uuid_v4(field: &str, raw: &str) -> Result<Uuid, ValidationError> {
    let invalid = || {
        ValidationError::single(
            field,
            FieldError::with_value("invalid UUIDv4 format", Value::String(raw.to_string())),
        )
    };

    let id = Uuid::parse_str(raw).map_err(|_| invalid())?;
    if raw != id.hyphenated().to_string() {
        return Err(invalid());
    }
    if id.get_version() != Some(Version::Random) || id.get_variant() != Variant::RFC4122 {
        return Err(invalid());
    }
    Ok(id)
}
