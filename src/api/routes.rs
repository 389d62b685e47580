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

//! Route table for the resource endpoints.

use axum::{
    extract::Extension,
    middleware,
    routing::get,
    Router,
};

use super::auth::authorize;
use super::handlers;
use crate::models::{Doodad, Widget};
use crate::repository::Repository;

/// Build the router for all resource endpoints.
///
/// Every route passes through the [`authorize`] hook before its handler.
pub fn build_router(widgets: Repository<Widget>, doodads: Repository<Doodad>) -> Router {
    Router::new()
        // Widget routes
        .route(
            "/widgets",
            get(handlers::list_widgets).post(handlers::create_widget),
        )
        .route(
            "/widgets/:widgetId",
            get(handlers::get_widget)
                .patch(handlers::update_widget)
                .delete(handlers::delete_widget),
        )
        // Doodad routes
        .route(
            "/doodads",
            get(handlers::list_doodads).post(handlers::create_doodad),
        )
        .route(
            "/doodads/:doodadId",
            get(handlers::get_doodad)
                .patch(handlers::update_doodad)
                .delete(handlers::delete_doodad),
        )
        .route_layer(middleware::from_fn(authorize))
        .layer(Extension(widgets))
        .layer(Extension(doodads))
}
