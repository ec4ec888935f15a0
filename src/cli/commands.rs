use crate::domain::entities::vector_record::{VectorBatch, VectorRecord};
use crate::domain::error::DomainError;
use crate::domain::values::point_id::PointId;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;

#[derive(Parser)]
#[command(name = "vecstore", about = "Create, fill and search vector collections")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a collection
    Create {
        /// Collection name
        name: String,
        /// Vector dimensionality
        #[arg(long, default_value = "1536")]
        size: u64,
        /// Distance metric (DOT, COSINE, EUCLID)
        #[arg(long, default_value = "DOT")]
        distance: String,
    },
    /// Insert or replace vectors
    Add {
        /// Collection name
        collection: String,
        /// JSON object mapping id to {"vector": [...], "payload": {...}}
        json: String,
    },
    /// Similarity search, printing matched payloads
    Search {
        /// Collection name
        collection: String,
        /// Query vector as a JSON array
        vector: String,
        #[arg(long, default_value = "4")]
        limit: usize,
    },
}

/// Parse `{"<id>": {"vector": [...], "payload": {...}}, ...}` into a batch.
/// Ids are unsigned integers or UUIDs.
pub fn parse_batch(json: &str) -> Result<VectorBatch, DomainError> {
    let raw: BTreeMap<String, VectorRecord> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(id, record)| id.parse::<PointId>().map(|id| (id, record)))
        .collect()
}

pub fn parse_vector(json: &str) -> Result<Vec<f32>, DomainError> {
    Ok(serde_json::from_str(json)?)
}
