//! Web server module.
//!
//! Provides the HTTP API endpoints and serves the static site.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Path, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::storage::{PassageOutcome, Pessoa, StorageHandles, StoreError};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub storage: StorageHandles,
}

// =============================================================================
// Errors
// =============================================================================

/// Errors surfaced by the HTTP handlers.
///
/// Every failure maps to a bare status code; response bodies stay empty.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request field.
    Validation(&'static str),
    /// The referenced row does not exist.
    NotFound,
    /// Storage operation failed.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(reason) => {
                tracing::debug!(reason, "Request validation failed");
                StatusCode::BAD_REQUEST.into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

// =============================================================================
// Extractors
// =============================================================================

/// Extractor accepting a JSON or url-encoded form body.
///
/// Any body that fails to deserialize rejects with 400, including fields of
/// the wrong type.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
    Json<T>: FromRequest<S>,
    Form<T>: FromRequest<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|_| ApiError::Validation("malformed JSON body"))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| ApiError::Validation("malformed form body"))?;
            return Ok(Self(value));
        }

        Err(ApiError::Validation("unsupported content type"))
    }
}

// =============================================================================
// Request / Response Types
// =============================================================================

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db: Option<String>,
}

/// Body for the person and room insert endpoints.
#[derive(Debug, Deserialize)]
struct AddNameRequest {
    nome: Option<String>,
}

/// Body for the passage registration endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordPassageRequest {
    id_pessoa: Option<i64>,
    id_sala: Option<i64>,
    data_entrada: Option<String>,
    data_saida: Option<String>,
}

/// Body for the person removal endpoint.
#[derive(Debug, Deserialize)]
struct RemovePersonRequest {
    id: Option<i64>,
}

// =============================================================================
// Router
// =============================================================================

/// Create the Axum router with all routes.
///
/// When `static_root` is set, `/css` and `/assets` are served from the
/// matching subdirectories and unmatched paths fall back to `<root>/html`.
/// Explicit routes take precedence over the fallback.
pub fn create_router(state: AppState, static_root: Option<&FsPath>) -> Router {
    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .route("/pessoas", get(list_people_handler))
        .route("/pessoas/{id}", get(get_person_handler))
        .route("/adicionar-pessoa", post(add_person_handler))
        .route("/adicionar-sala", post(add_room_handler))
        .route("/registrar-passagem", post(record_passage_handler))
        .route("/remover-pessoa", post(remove_person_handler));

    if let Some(root) = static_root {
        router = router
            .nest_service("/css", ServeDir::new(root.join("css")))
            .nest_service("/assets", ServeDir::new(root.join("assets")))
            .fallback_service(ServeDir::new(root.join("html")));
    }

    router
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

// =============================================================================
// Handlers
// =============================================================================

/// Static acknowledgment at the root.
async fn root_handler() -> &'static str {
    "ok"
}

/// Liveness probe.
async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        db: None,
    })
}

/// Readiness probe that checks database availability.
async fn readyz_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.storage.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "ok".to_string(),
            db: Some("ready".to_string()),
        })
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "not_ready".to_string(),
                    db: Some(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// List all people.
async fn list_people_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Pessoa>>, ApiError> {
    Ok(Json(state.storage.people.list().await?))
}

/// Fetch a person by id. The array carries zero or one element; an unknown
/// id is an empty array, not 404.
async fn get_person_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Pessoa>>, ApiError> {
    Ok(Json(state.storage.people.get(id).await?))
}

/// Insert a person.
async fn add_person_handler(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<AddNameRequest>,
) -> Result<StatusCode, ApiError> {
    let nome = req
        .nome
        .filter(|nome| !nome.is_empty())
        .ok_or(ApiError::Validation("nome is required"))?;

    state.storage.people.insert(&nome).await?;
    Ok(StatusCode::CREATED)
}

/// Insert a room.
async fn add_room_handler(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<AddNameRequest>,
) -> Result<StatusCode, ApiError> {
    let nome = req
        .nome
        .filter(|nome| !nome.is_empty())
        .ok_or(ApiError::Validation("nome is required"))?;

    state.storage.rooms.insert(&nome).await?;
    Ok(StatusCode::CREATED)
}

/// Register a passage: upsert the room assignment keyed by person.
///
/// Returns 201 when the person had no assignment and 200 when an existing
/// one was overwritten.
async fn record_passage_handler(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<RecordPassageRequest>,
) -> Result<StatusCode, ApiError> {
    let id_pessoa = req
        .id_pessoa
        .filter(|id| *id > 0)
        .ok_or(ApiError::Validation("idPessoa must be a positive integer"))?;
    let id_sala = req
        .id_sala
        .filter(|id| *id > 0)
        .ok_or(ApiError::Validation("idSala must be a positive integer"))?;

    let outcome = state
        .storage
        .passages
        .record(
            id_pessoa,
            id_sala,
            req.data_entrada.as_deref(),
            req.data_saida.as_deref(),
        )
        .await?;

    match outcome {
        PassageOutcome::Inserted => Ok(StatusCode::CREATED),
        PassageOutcome::Updated => Ok(StatusCode::OK),
    }
}

/// Remove a person and any room assignment they hold.
async fn remove_person_handler(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<RemovePersonRequest>,
) -> Result<StatusCode, ApiError> {
    let id = req
        .id
        .filter(|id| *id > 0)
        .ok_or(ApiError::Validation("id must be a positive integer"))?;

    if state.storage.people.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
