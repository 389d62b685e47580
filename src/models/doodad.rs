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

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Resource;
use crate::validation::{FieldSpec, Schema};

/// A doodad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Doodad {
    /// Unique identifier (UUIDv4), assigned on creation
    pub id: Uuid,
    /// Display name of the doodad
    pub name: String,
    /// Free-form description
    pub description: String,
    /// URL of an image of the doodad
    pub image: String,
    /// Unit price
    pub price: f64,
}

/// Request body for creating a doodad
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct DoodadCreateBody {
    #[schema(min_length = 1)]
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

/// Request body for updating a doodad. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct DoodadUpdateBody {
    #[schema(min_length = 1)]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
}

impl Schema for DoodadCreateBody {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", 1),
        FieldSpec::text("description", 0),
        FieldSpec::text("image", 0),
        FieldSpec::number("price"),
    ];
}

impl Schema for DoodadUpdateBody {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", 1).optional(),
        FieldSpec::text("description", 0).optional(),
        FieldSpec::text("image", 0).optional(),
        FieldSpec::number("price").optional(),
    ];
}

impl Resource for Doodad {
    type CreateBody = DoodadCreateBody;
    type UpdateBody = DoodadUpdateBody;

    const NAME: &'static str = "Doodad";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_body(id: Uuid, body: DoodadCreateBody) -> Self {
        Self {
            id,
            name: body.name,
            description: body.description,
            image: body.image,
            price: body.price,
        }
    }

    fn merge(&mut self, patch: DoodadUpdateBody) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}
