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

//! REST API implementation.
//!
//! ## API Structure
//!
//! ```text
//! /health                  - Health check
//! /widgets                 - List (GET) and create (POST) widgets
//! /widgets/{widgetId}      - Get, update (PATCH) and delete a widget
//! /doodads                 - List (GET) and create (POST) doodads
//! /doodads/{doodadId}      - Get, update (PATCH) and delete a doodad
//! /openapi.json            - OpenAPI document
//! /docs                    - Swagger UI
//! ```
//!
//! ## Module Organization
//!
//! - `shared` - Error mapping, extractors and resource-generic handler logic
//! - `handlers` - Per-resource endpoints with OpenAPI annotations
//! - `routes` - Route table
//! - `auth` - Authorization hook applied to resource routes
//! - `openapi` - OpenAPI document

pub mod auth;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod shared;

pub use openapi::ApiDoc;
pub use routes::build_router;
pub use shared::error::*;
pub use shared::responses::*;
