//! Qdrant REST request and response bodies.

use crate::domain::entities::vector_record::{Payload, VectorBatch};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::UpdateStatus;
use crate::domain::values::distance::Distance;
use crate::domain::values::point_id::PointId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct CreateCollectionRequest {
    pub vectors: VectorParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct VectorParams {
    pub size: u64,
    pub distance: Distance,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpsertRequest<'a> {
    pub points: Vec<PointStruct<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PointStruct<'a> {
    pub id: PointId,
    pub vector: &'a [f32],
    pub payload: &'a Payload,
}

impl<'a> UpsertRequest<'a> {
    pub fn from_batch(batch: &'a VectorBatch) -> Self {
        let points = batch
            .iter()
            .map(|(id, record)| PointStruct {
                id: *id,
                vector: &record.vector,
                payload: &record.payload,
            })
            .collect();
        Self { points }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub vector: &'a [f32],
    pub limit: usize,
    pub with_payload: bool,
}

/// Envelope every successful Qdrant response is wrapped in.
#[derive(Debug, Deserialize)]
pub(crate) struct QdrantResponse<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateResult {
    #[serde(default)]
    pub operation_id: Option<u64>,
    pub status: UpdateStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoredPoint {
    pub score: f32,
    #[serde(default)]
    pub payload: Option<Payload>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    status: ErrorStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    error: String,
}

/// Qdrant's `status.error` text, or the raw body when it is not an error
/// envelope.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) => resp.status.error,
        Err(_) => body.trim().to_string(),
    }
}

/// Map a non-success HTTP status onto the error taxonomy. `collection` is
/// the collection the request addressed.
pub(crate) fn classify_failure(status: u16, body: &str, collection: &str) -> DomainError {
    let message = error_message(body);
    match status {
        404 => DomainError::CollectionNotFound(collection.to_string()),
        400 | 422 if message.to_lowercase().contains("dimension") => {
            DomainError::DimensionMismatch(message)
        }
        500..=599 => {
            DomainError::BackendUnavailable(format!("Qdrant returned {status}: {message}"))
        }
        _ => DomainError::Backend { status, message },
    }
}
