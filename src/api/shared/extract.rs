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

//! Request extraction with schema validation.
//!
//! Every extractor here fails with an [`ApiError`], so a bad path, query or
//! body is answered by the same error mapper as everything else.

use axum::{
    async_trait,
    extract::{
        rejection::{PathRejection, QueryRejection},
        FromRequest, Path, Query, Request,
    },
    http::StatusCode,
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use utoipa::IntoParams;
use uuid::Uuid;

use super::error::ApiError;
use crate::validation::{self, FieldError, Schema, ValidationError, BODY_PREFIX};

/// JSON body that has passed its [`Schema`] check.
///
/// The body is parsed regardless of `Content-Type`. An empty body is read as
/// `{}` so that it fails on its missing fields rather than as invalid JSON.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge
                } else {
                    ApiError::MalformedBody(rejection.body_text())
                }
            })?;

        let value = parse_body(&body)?;
        validation::validate_body(&value, T::FIELDS)?;

        serde_json::from_value(value).map(ValidatedJson).map_err(|e| {
            ApiError::Validation(ValidationError::single(
                BODY_PREFIX,
                FieldError::new(e.to_string()),
            ))
        })
    }
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Resolve the record id path parameter named `field`.
pub fn record_id(field: &str, path: Result<Path<String>, PathRejection>) -> Result<Uuid, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        ValidationError::single(field, FieldError::new(rejection.body_text()))
    })?;
    Ok(validation::parse_uuid_v4(field, &raw)?)
}

/// Query parameters for list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// The maximum number of records to retrieve (default 10)
    pub limit: Option<usize>,
    /// The number of records to skip before starting to collect the result set (default 0)
    pub offset: Option<usize>,
    /// Only return records whose name contains this text (case-sensitive)
    pub name: Option<String>,
}

/// Unwrap list query parameters, turning a bad value into a validation error.
pub fn list_query(query: Result<Query<ListQuery>, QueryRejection>) -> Result<ListQuery, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        ValidationError::single("query", FieldError::new(rejection.body_text()))
    })?;
    Ok(params)
}
