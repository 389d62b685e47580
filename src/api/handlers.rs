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

//! Endpoint handlers with OpenAPI documentation.
//!
//! Each handler extracts and validates its parameters, then delegates to the
//! resource-generic logic in [`crate::api::shared::handlers`].

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::Json,
};

use crate::api::shared::extract::{list_query, record_id, ListQuery, ValidatedJson};
use crate::api::shared::handlers as shared;
use crate::api::shared::{ApiError, ErrorResponse, HealthResponse, NotFoundResponse};
use crate::models::{
    Doodad, DoodadCreateBody, DoodadUpdateBody, Widget, WidgetCreateBody, WidgetUpdateBody,
};
use crate::repository::Repository;

const WIDGET_ID: &str = "widgetId";
const DOODAD_ID: &str = "doodadId";

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    shared::health_check().await
}

// =============================================================================
// Widgets
// =============================================================================

/// Retrieve a widget by its unique identifier
#[utoipa::path(
    get,
    path = "/widgets/{widgetId}",
    params(
        ("widgetId" = Uuid, Path, description = "The unique identifier of the widget to retrieve")
    ),
    responses(
        (status = 200, description = "The widget", body = Widget),
        (status = 404, description = "Widget not found", body = NotFoundResponse),
        (status = 422, description = "Malformed widget id", body = ErrorResponse),
    ),
    tag = "Widgets"
)]
pub async fn get_widget(
    Extension(widgets): Extension<Repository<Widget>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Widget>, ApiError> {
    let id = record_id(WIDGET_ID, path)?;
    shared::get_record(&widgets, id).await
}

/// List widgets
///
/// Uses simple offset pagination over the widgets ordered by id.
#[utoipa::path(
    get,
    path = "/widgets",
    params(ListQuery),
    responses(
        (status = 200, description = "A page of widgets", body = [Widget]),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse),
    ),
    tag = "Widgets"
)]
pub async fn list_widgets(
    Extension(widgets): Extension<Repository<Widget>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Widget>>, ApiError> {
    let params = list_query(query)?;
    Ok(shared::list_records(&widgets, params).await)
}

/// Create a new widget
#[utoipa::path(
    post,
    path = "/widgets",
    request_body = WidgetCreateBody,
    responses(
        (status = 201, description = "Widget created", body = Widget),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Request body failed validation", body = ErrorResponse),
    ),
    tag = "Widgets"
)]
pub async fn create_widget(
    Extension(widgets): Extension<Repository<Widget>>,
    ValidatedJson(body): ValidatedJson<WidgetCreateBody>,
) -> (StatusCode, Json<Widget>) {
    shared::create_record(&widgets, body).await
}

/// Update an existing widget
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    patch,
    path = "/widgets/{widgetId}",
    params(
        ("widgetId" = Uuid, Path, description = "The unique identifier of the widget to update")
    ),
    request_body = WidgetUpdateBody,
    responses(
        (status = 200, description = "The updated widget", body = Widget),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 404, description = "Widget not found", body = NotFoundResponse),
        (status = 422, description = "Request failed validation", body = ErrorResponse),
    ),
    tag = "Widgets"
)]
pub async fn update_widget(
    Extension(widgets): Extension<Repository<Widget>>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(patch): ValidatedJson<WidgetUpdateBody>,
) -> Result<Json<Widget>, ApiError> {
    let id = record_id(WIDGET_ID, path)?;
    shared::update_record(&widgets, id, patch).await
}

/// Delete a widget
#[utoipa::path(
    delete,
    path = "/widgets/{widgetId}",
    params(
        ("widgetId" = Uuid, Path, description = "The unique identifier of the widget to delete")
    ),
    responses(
        (status = 204, description = "Widget deleted"),
        (status = 404, description = "Widget not found", body = NotFoundResponse),
        (status = 422, description = "Malformed widget id", body = ErrorResponse),
    ),
    tag = "Widgets"
)]
pub async fn delete_widget(
    Extension(widgets): Extension<Repository<Widget>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = record_id(WIDGET_ID, path)?;
    shared::delete_record(&widgets, id).await
}

// =============================================================================
// Doodads
// =============================================================================

/// Retrieve a doodad by its unique identifier
#[utoipa::path(
    get,
    path = "/doodads/{doodadId}",
    params(
        ("doodadId" = Uuid, Path, description = "The unique identifier of the doodad to retrieve")
    ),
    responses(
        (status = 200, description = "The doodad", body = Doodad),
        (status = 404, description = "Doodad not found", body = NotFoundResponse),
        (status = 422, description = "Malformed doodad id", body = ErrorResponse),
    ),
    tag = "Doodads"
)]
pub async fn get_doodad(
    Extension(doodads): Extension<Repository<Doodad>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Doodad>, ApiError> {
    let id = record_id(DOODAD_ID, path)?;
    shared::get_record(&doodads, id).await
}

/// List doodads
#[utoipa::path(
    get,
    path = "/doodads",
    params(ListQuery),
    responses(
        (status = 200, description = "A page of doodads", body = [Doodad]),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse),
    ),
    tag = "Doodads"
)]
pub async fn list_doodads(
    Extension(doodads): Extension<Repository<Doodad>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Doodad>>, ApiError> {
    let params = list_query(query)?;
    Ok(shared::list_records(&doodads, params).await)
}

/// Create a new doodad
#[utoipa::path(
    post,
    path = "/doodads",
    request_body = DoodadCreateBody,
    responses(
        (status = 201, description = "Doodad created", body = Doodad),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 422, description = "Request body failed validation", body = ErrorResponse),
    ),
    tag = "Doodads"
)]
pub async fn create_doodad(
    Extension(doodads): Extension<Repository<Doodad>>,
    ValidatedJson(body): ValidatedJson<DoodadCreateBody>,
) -> (StatusCode, Json<Doodad>) {
    shared::create_record(&doodads, body).await
}

/// Update an existing doodad
#[utoipa::path(
    patch,
    path = "/doodads/{doodadId}",
    params(
        ("doodadId" = Uuid, Path, description = "The unique identifier of the doodad to update")
    ),
    request_body = DoodadUpdateBody,
    responses(
        (status = 200, description = "The updated doodad", body = Doodad),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 404, description = "Doodad not found", body = NotFoundResponse),
        (status = 422, description = "Request failed validation", body = ErrorResponse),
    ),
    tag = "Doodads"
)]
pub async fn update_doodad(
    Extension(doodads): Extension<Repository<Doodad>>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(patch): ValidatedJson<DoodadUpdateBody>,
) -> Result<Json<Doodad>, ApiError> {
    let id = record_id(DOODAD_ID, path)?;
    shared::update_record(&doodads, id, patch).await
}

/// Delete a doodad
#[utoipa::path(
    delete,
    path = "/doodads/{doodadId}",
    params(
        ("doodadId" = Uuid, Path, description = "The unique identifier of the doodad to delete")
    ),
    responses(
        (status = 204, description = "Doodad deleted"),
        (status = 404, description = "Doodad not found", body = NotFoundResponse),
        (status = 422, description = "Malformed doodad id", body = ErrorResponse),
    ),
    tag = "Doodads"
)]
pub async fn delete_doodad(
    Extension(doodads): Extension<Repository<Doodad>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = record_id(DOODAD_ID, path)?;
    shared::delete_record(&doodads, id).await
}
