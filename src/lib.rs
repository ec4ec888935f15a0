pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::domain::entities::vector_record::{Payload, VectorBatch};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::{UpsertAck, VectorStore};
use crate::domain::values::backend::Backend;
use crate::domain::values::distance::Distance;
use crate::infrastructure::qdrant::store::QdrantStore;
use std::sync::Arc;

pub const DEFAULT_URL: &str = "http://localhost:6333";

pub struct VecStore {
    store: Arc<dyn VectorStore>,
}

impl VecStore {
    /// Build a store from `VECSTORE_BACKEND` and `VECSTORE_URL`.
    pub fn new() -> Result<Self, DomainError> {
        let backend: Backend = std::env::var("VECSTORE_BACKEND")
            .map(|b| b.parse::<Backend>())
            .unwrap_or(Ok(Backend::default()))?;
        let url = std::env::var("VECSTORE_URL").unwrap_or_else(|_| DEFAULT_URL.into());

        Self::connect(backend, &url)
    }

    pub fn connect(backend: Backend, url: &str) -> Result<Self, DomainError> {
        let store: Arc<dyn VectorStore> = match backend {
            Backend::Qdrant => Arc::new(QdrantStore::new(url)?),
        };
        tracing::debug!(backend = store.name(), url, "Vector store configured");
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn VectorStore> {
        self.store.clone()
    }

    pub async fn create_collection(
        &self,
        name: &str,
        vector_size: u64,
        distance: Distance,
    ) -> Result<bool, DomainError> {
        self.store.create_collection(name, vector_size, distance).await
    }

    pub async fn add_vectors(
        &self,
        collection_name: &str,
        vectors: &VectorBatch,
    ) -> Result<UpsertAck, DomainError> {
        self.store.add_vectors(collection_name, vectors).await
    }

    pub async fn search_vectors(
        &self,
        collection_name: &str,
        query_vector: &[f32],
        limit: Option<usize>,
    ) -> Result<Vec<Payload>, DomainError> {
        self.store
            .search_vectors(collection_name, query_vector, limit)
            .await
    }
}
