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

/// A widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Widget {
    /// Unique identifier (UUIDv4), assigned on creation
    pub id: Uuid,
    /// Display name of the widget
    pub name: String,
    /// Free-form description
    pub description: String,
    /// URL of an image of the widget
    pub image: String,
}

/// Request body for creating a widget
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct WidgetCreateBody {
    /// Display name of the widget
    #[schema(min_length = 1)]
    pub name: String,
    /// Free-form description
    pub description: String,
    /// URL of an image of the widget
    pub image: String,
}

/// Request body for updating a widget. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct WidgetUpdateBody {
    #[schema(min_length = 1)]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Schema for WidgetCreateBody {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", 1),
        FieldSpec::text("description", 0),
        FieldSpec::text("image", 0),
    ];
}

impl Schema for WidgetUpdateBody {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", 1).optional(),
        FieldSpec::text("description", 0).optional(),
        FieldSpec::text("image", 0).optional(),
    ];
}

impl Resource for Widget {
    type CreateBody = WidgetCreateBody;
    type UpdateBody = WidgetUpdateBody;

    const NAME: &'static str = "Widget";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_body(id: Uuid, body: WidgetCreateBody) -> Self {
        Self {
            id,
            name: body.name,
            description: body.description,
            image: body.image,
        }
    }

    fn merge(&mut self, patch: WidgetUpdateBody) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Widget {
        Widget::from_body(
            Uuid::new_v4(),
            WidgetCreateBody {
                name: "widget".to_string(),
                description: "A widget".to_string(),
                image: "https://an.image.url".to_string(),
            },
        )
    }

    #[test]
    fn test_merge_only_touches_present_fields() {
        let mut record = widget();
        let id = record.id;

        record.merge(WidgetUpdateBody {
            description: Some("Shinier".to_string()),
            ..Default::default()
        });

        assert_eq!(record.id, id);
        assert_eq!(record.name, "widget");
        assert_eq!(record.description, "Shinier");
        assert_eq!(record.image, "https://an.image.url");
    }

    #[test]
    fn test_update_body_ignores_id() {
        let patch: WidgetUpdateBody =
            serde_json::from_value(json!({"id": Uuid::new_v4(), "name": "renamed"})).unwrap();

        let mut record = widget();
        let id = record.id;
        record.merge(patch);

        assert_eq!(record.id, id);
        assert_eq!(record.name, "renamed");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(widget()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["description", "id", "image", "name"]);
    }
}
