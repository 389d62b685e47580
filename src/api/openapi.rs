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

//! OpenAPI documentation.
//!
//! The document is served at `/openapi.json` and the Swagger UI at `/docs/`.

use utoipa::OpenApi;

use crate::api::shared::{ErrorResponse, HealthResponse, NotFoundResponse};
use crate::models::{
    Doodad, DoodadCreateBody, DoodadUpdateBody, Widget, WidgetCreateBody, WidgetUpdateBody,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::list_widgets,
        super::handlers::create_widget,
        super::handlers::get_widget,
        super::handlers::update_widget,
        super::handlers::delete_widget,
        super::handlers::list_doodads,
        super::handlers::create_doodad,
        super::handlers::get_doodad,
        super::handlers::update_doodad,
        super::handlers::delete_doodad,
    ),
    components(
        schemas(
            Widget,
            WidgetCreateBody,
            WidgetUpdateBody,
            Doodad,
            DoodadCreateBody,
            DoodadUpdateBody,
            HealthResponse,
            ErrorResponse,
            NotFoundResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Widgets", description = "Widget management"),
        (name = "Doodads", description = "Doodad management"),
    ),
    info(
        title = "Widget API",
        version = "1.0.0",
        description = "REST API for managing widgets and doodads.\n\nList endpoints use offset pagination: records are ordered by id and `limit` records are returned starting at `offset`.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDoc;
