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

//! In-memory REST service for widgets and doodads.
//!
//! Records live in a [`repository::Repository`] per resource type and are
//! exposed over HTTP by [`server::WidgetServer`].

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod repository;
pub mod server;
pub mod store;
pub mod validation;

pub use config::{load_config_file, save_config_file, ServerConfig};
pub use models::{Doodad, Resource, Widget};
pub use repository::Repository;
pub use server::WidgetServer;
