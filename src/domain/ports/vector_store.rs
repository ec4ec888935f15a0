//! Vector storage port.
//!
//! [`VectorStore`] is the capability set every vector-search backend must
//! provide. Indexing, ranking and persistence all happen in the backend; an
//! implementation only shapes requests and projects responses.

use crate::domain::entities::vector_record::{Payload, VectorBatch};
use crate::domain::error::DomainError;
use crate::domain::values::distance::Distance;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result count used by `search_vectors` when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 4;

/// Backend state of a write once it has been acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    /// Accepted but not yet applied.
    Acknowledged,
    /// Applied and durable.
    Completed,
    /// The backend gave up waiting for the write to apply.
    WaitTimeout,
    #[serde(other)]
    Unknown,
}

/// Acknowledgement of an `add_vectors` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertAck {
    pub operation_id: Option<u64>,
    pub status: UpdateStatus,
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Create a collection of `vector_size`-dimensional vectors ranked by
    /// `distance`. Returns the backend's acknowledgement.
    async fn create_collection(
        &self,
        name: &str,
        vector_size: u64,
        distance: Distance,
    ) -> Result<bool, DomainError>;

    /// Insert or replace every record in `vectors`. Returns once the
    /// backend reports the whole batch durable.
    async fn add_vectors(
        &self,
        collection_name: &str,
        vectors: &VectorBatch,
    ) -> Result<UpsertAck, DomainError>;

    /// Payloads of the records closest to `query_vector`, best first, at
    /// most `limit` of them (`DEFAULT_SEARCH_LIMIT` when `None`).
    async fn search_vectors(
        &self,
        collection_name: &str,
        query_vector: &[f32],
        limit: Option<usize>,
    ) -> Result<Vec<Payload>, DomainError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
