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

//! Resource records and their request bodies.
//!
//! Each resource type (widgets, doodads) has a record type plus a create body
//! and a partial update body. The [`Resource`] trait ties the three together so
//! the store, repository and handlers can be written once.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::validation::Schema;

pub mod doodad;
pub mod seed;
pub mod widget;

pub use doodad::{Doodad, DoodadCreateBody, DoodadUpdateBody};
pub use widget::{Widget, WidgetCreateBody, WidgetUpdateBody};

/// A named entity type with its own store and endpoints.
pub trait Resource: Clone + Send + Sync + Serialize + 'static {
    /// Body accepted when creating a record. All fields required.
    type CreateBody: Schema + DeserializeOwned + Send + 'static;
    /// Body accepted when updating a record. Every field optional.
    type UpdateBody: Schema + DeserializeOwned + Send + 'static;

    /// Human readable singular name, used in not-found reasons.
    const NAME: &'static str;

    fn id(&self) -> Uuid;

    fn name(&self) -> &str;

    /// Build a new record from a create body and a freshly generated id.
    fn from_body(id: Uuid, body: Self::CreateBody) -> Self;

    /// Shallow-merge the fields present in `patch` over this record.
    /// The id is never touched.
    fn merge(&mut self, patch: Self::UpdateBody);
}
