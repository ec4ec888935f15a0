use crate::domain::values::point_id::PointId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arbitrary metadata attached to a vector and handed back by search.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Records keyed by id, as accepted by `VectorStore::add_vectors`.
pub type VectorBatch = BTreeMap<PointId, VectorRecord>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub vector: Vec<f32>,
    #[serde(default)]
    pub payload: Payload,
}

impl VectorRecord {
    pub fn new(vector: Vec<f32>, payload: Payload) -> Self {
        Self { vector, payload }
    }

    /// Build a record from a JSON object payload. Anything that is not an
    /// object is stored under the `"value"` key.
    pub fn with_json(vector: Vec<f32>, payload: serde_json::Value) -> Self {
        let payload = match payload {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => Payload::new(),
            other => {
                let mut map = Payload::new();
                map.insert("value".into(), other);
                map
            }
        };
        Self::new(vector, payload)
    }
}
