//! Shared test helpers.
#![allow(dead_code)]

use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use vecstore::domain::entities::vector_record::{VectorBatch, VectorRecord};
use vecstore::domain::values::point_id::PointId;
use vecstore::infrastructure::qdrant::store::QdrantStore;

/// A mock Qdrant server and a store pointed at it.
pub async fn setup() -> (ServerGuard, QdrantStore) {
    let server = Server::new_async().await;
    let store = QdrantStore::new(&server.url()).unwrap();
    (server, store)
}

/// Body of a successful Qdrant response.
pub fn qdrant_ok(result: Value) -> String {
    json!({"result": result, "status": "ok", "time": 0.001}).to_string()
}

/// Body of a failed Qdrant response.
pub fn qdrant_err(message: &str) -> String {
    json!({"status": {"error": message}, "time": 0.0}).to_string()
}

pub fn batch(records: Vec<(u64, Vec<f32>, Value)>) -> VectorBatch {
    records
        .into_iter()
        .map(|(id, vector, payload)| (PointId::from(id), VectorRecord::with_json(vector, payload)))
        .collect()
}
