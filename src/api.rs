use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
        },
        HeaderName, HeaderValue, Method, Request, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::ai::{GenerationParams, TextGenerator};
use crate::suggestions::generate_suggestions;
use crate::usage::UsageInput;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[derive(Debug, Serialize)]
struct FailureResponse {
    error: &'static str,
    details: String,
}

/// Shared handler state. The generator is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub params: GenerationParams,
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/suggestions", post(suggestions))
        .with_state(state)
        .layer(middleware::from_fn(allow_cors))
        .layer(middleware::from_fn(assign_request_id))
}

async fn home() -> Response {
    (
        StatusCode::OK,
        Json(StatusMessage {
            message: "Server is running".to_string(),
        }),
    )
        .into_response()
}

async fn health() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK".to_string(),
        }),
    )
        .into_response()
}

async fn suggestions(
    State(state): State<AppState>,
    Extension(request): Extension<RequestContext>,
    body: Bytes,
) -> Response {
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::debug!(request_id = %request.request_id, error = %err, "Rejected malformed JSON body");
            return bad_request_response("Invalid JSON body");
        }
    };

    let input = match UsageInput::from_json(&payload) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(request_id = %request.request_id, error = %err, "Rejected request with missing values");
            return bad_request_response("Missing required values");
        }
    };

    tracing::info!(
        request_id = %request.request_id,
        units_used = %input.units_used,
        per_unit_cost = %input.per_unit_cost,
        total_bill = %input.total_bill,
        "Generating suggestions"
    );

    let tips = match generate_suggestions(state.generator.as_ref(), &input, &state.params).await {
        Ok(tips) => tips,
        Err(err) => {
            tracing::error!(
                request_id = %request.request_id,
                error = %err,
                "Failed to generate suggestions"
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    error: "Failed to generate suggestions",
                    details: format!("{err:#}"),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(request_id = %request.request_id, tips = %tips, "Generated suggestions");
    (
        StatusCode::OK,
        Json(SuggestionsResponse {
            suggestions: tips.into_vec(),
        }),
    )
        .into_response()
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().clone();
    let mut response = next.run(req).await;
    let status = response.status();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }
    tracing::debug!(
        request_id,
        method = %method,
        uri = %uri,
        status = %status,
        "API request completed"
    );
    response
}

/// Allow browser clients from any origin, answering preflights directly.
async fn allow_cors(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let allow_headers = req
            .headers()
            .get(ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("content-type"));
        let mut response = StatusCode::NO_CONTENT.into_response();
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
        return response;
    }

    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

fn bad_request_response(error: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}
