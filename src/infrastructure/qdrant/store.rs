use super::wire::{
    classify_failure, CreateCollectionRequest, QdrantResponse, ScoredPoint, SearchRequest,
    UpdateResult, UpsertRequest, VectorParams,
};
use crate::domain::entities::vector_record::{Payload, VectorBatch};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::{
    UpdateStatus, UpsertAck, VectorStore, DEFAULT_SEARCH_LIMIT,
};
use crate::domain::values::distance::Distance;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// [`VectorStore`] backed by a Qdrant instance, spoken to over its REST API.
///
/// Holds one pooled HTTP client for its whole lifetime; share it behind an
/// `Arc` rather than building one per call.
pub struct QdrantStore {
    client: Client,
    base_url: Url,
}

impl QdrantStore {
    pub fn new(url: &str) -> Result<Self, DomainError> {
        let base_url = Url::parse(url.trim()).map_err(|e| {
            DomainError::InvalidConfiguration(format!("Invalid Qdrant URL {url}: {e}"))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidConfiguration(format!(
                "Qdrant URL must be http or https: {url}"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// `segments` appended to the base URL, each percent-encoded as one path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path, so this cannot fail.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        collection: &str,
    ) -> Result<T, DomainError> {
        let resp = request.send().await.map_err(|e| {
            DomainError::BackendUnavailable(format!("Qdrant request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            let err = classify_failure(status, &body, collection);
            tracing::warn!(status, collection, error = %err, "Qdrant rejected request");
            return Err(err);
        }

        let parsed: QdrantResponse<T> = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Invalid Qdrant response: {e}")))?;
        Ok(parsed.result)
    }
}

#[async_trait]
impl VectorStore for QdrantStore {
    async fn create_collection(
        &self,
        name: &str,
        vector_size: u64,
        distance: Distance,
    ) -> Result<bool, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "Collection name must not be empty".into(),
            ));
        }
        if vector_size == 0 {
            return Err(DomainError::InvalidConfiguration(format!(
                "Vector size for collection {name} must be positive"
            )));
        }

        tracing::debug!(collection = name, vector_size, %distance, "Creating collection");
        let body = CreateCollectionRequest {
            vectors: VectorParams {
                size: vector_size,
                distance,
            },
        };
        let request = self
            .client
            .put(self.endpoint(&["collections", name]))
            .json(&body);
        self.send(request, name).await
    }

    async fn add_vectors(
        &self,
        collection_name: &str,
        vectors: &VectorBatch,
    ) -> Result<UpsertAck, DomainError> {
        tracing::debug!(
            collection = collection_name,
            points = vectors.len(),
            "Upserting points"
        );
        let request = self
            .client
            .put(self.endpoint(&["collections", collection_name, "points"]))
            .query(&[("wait", "true")])
            .json(&UpsertRequest::from_batch(vectors));
        let result: UpdateResult = self.send(request, collection_name).await?;

        match result.status {
            UpdateStatus::Completed => Ok(UpsertAck {
                operation_id: result.operation_id,
                status: result.status,
            }),
            UpdateStatus::Acknowledged | UpdateStatus::WaitTimeout => {
                Err(DomainError::BackendUnavailable(format!(
                    "Qdrant did not confirm upsert into {collection_name} (status {:?})",
                    result.status
                )))
            }
            UpdateStatus::Unknown => Err(DomainError::Backend {
                status: 200,
                message: format!("Unrecognized upsert status for {collection_name}"),
            }),
        }
    }

    async fn search_vectors(
        &self,
        collection_name: &str,
        query_vector: &[f32],
        limit: Option<usize>,
    ) -> Result<Vec<Payload>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if limit == 0 {
            return Err(DomainError::InvalidConfiguration(
                "Search limit must be positive".into(),
            ));
        }

        tracing::debug!(
            collection = collection_name,
            dim = query_vector.len(),
            limit,
            "Searching"
        );
        let request = self
            .client
            .post(self.endpoint(&["collections", collection_name, "points", "search"]))
            .json(&SearchRequest {
                vector: query_vector,
                limit,
                with_payload: true,
            });
        let hits: Vec<ScoredPoint> = self.send(request, collection_name).await?;

        if let Some(top) = hits.first() {
            tracing::debug!(
                collection = collection_name,
                hits = hits.len(),
                top_score = top.score,
                "Search done"
            );
        }
        Ok(hits
            .into_iter()
            .map(|hit| hit.payload.unwrap_or_default())
            .collect())
    }

    fn name(&self) -> &str {
        "qdrant"
    }
}
