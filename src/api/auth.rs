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

//! Authorization hook run before every resource handler.
//!
//! Currently a pass-through. A real deployment would check credentials here
//! (e.g. a bearer token) and either reject the request or attach the caller
//! to the request extensions before calling `next`.

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn authorize(request: Request, next: Next) -> Response {
    log::debug!(
        "Authorizing {} {}",
        request.method(),
        request.uri().path()
    );
    next.run(request).await
}
