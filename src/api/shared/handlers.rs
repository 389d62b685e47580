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

//! Handler logic shared by every resource type.
//!
//! The per-resource handlers in [`crate::api::handlers`] extract and validate the
//! request, then delegate here. These functions only translate repository
//! results into responses: a missing record becomes [`ApiError::NotFound`].

use axum::{http::StatusCode, response::Json};
use uuid::Uuid;

use super::error::ApiError;
use super::extract::ListQuery;
use super::responses::HealthResponse;
use crate::models::Resource;
use crate::repository::Repository;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_OFFSET: usize = 0;

/// Check server health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub async fn get_record<R: Resource>(repo: &Repository<R>, id: Uuid) -> Result<Json<R>, ApiError> {
    repo.find_by_id(&id)
        .await
        .map(Json)
        .ok_or(ApiError::not_found(R::NAME))
}

pub async fn list_records<R: Resource>(repo: &Repository<R>, params: ListQuery) -> Json<Vec<R>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(DEFAULT_OFFSET);

    // An empty name filter is the same as no filter.
    let records = match params.name.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => repo.find_by_name(name, offset, limit).await,
        None => repo.find_all(offset, limit).await,
    };
    Json(records)
}

pub async fn create_record<R: Resource>(
    repo: &Repository<R>,
    body: R::CreateBody,
) -> (StatusCode, Json<R>) {
    let record = repo.create(body).await;
    log::info!("{} '{}' created", R::NAME, record.id());
    (StatusCode::CREATED, Json(record))
}

pub async fn update_record<R: Resource>(
    repo: &Repository<R>,
    id: Uuid,
    patch: R::UpdateBody,
) -> Result<Json<R>, ApiError> {
    match repo.update(&id, patch).await {
        Some(record) => {
            log::info!("{} '{id}' updated", R::NAME);
            Ok(Json(record))
        }
        None => Err(ApiError::not_found(R::NAME)),
    }
}

pub async fn delete_record<R: Resource>(
    repo: &Repository<R>,
    id: Uuid,
) -> Result<StatusCode, ApiError> {
    if repo.delete_by_id(&id).await {
        log::info!("{} '{id}' deleted", R::NAME);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(R::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::{seed_widgets, FIRST_SEED_ID};
    use crate::models::{Widget, WidgetUpdateBody};

    #[tokio::test]
    async fn test_list_defaults() {
        let repo = Repository::with_records(
            (0..15).map(|i| Widget {
                id: Uuid::new_v4(),
                name: format!("w{i}"),
                description: String::new(),
                image: String::new(),
            }),
        );

        let Json(page) = list_records(&repo, ListQuery::default()).await;
        assert_eq!(page.len(), DEFAULT_LIMIT);
        assert_eq!(page, repo.find_all(0, DEFAULT_LIMIT).await);
    }

    #[tokio::test]
    async fn test_list_empty_name_is_unfiltered() {
        let repo = Repository::with_records(seed_widgets());
        let params = ListQuery {
            name: Some(String::new()),
            ..Default::default()
        };

        let Json(page) = list_records(&repo, params).await;
        assert_eq!(page.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let repo = Repository::with_records(seed_widgets());
        let missing = Uuid::new_v4();

        let err = get_record(&repo, missing).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "Widget" }));

        let err = update_record(&repo, missing, WidgetUpdateBody::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = delete_record(&repo, missing).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let repo = Repository::with_records(seed_widgets());
        assert_eq!(
            delete_record(&repo, FIRST_SEED_ID).await.unwrap(),
            StatusCode::NO_CONTENT
        );
    }
}
