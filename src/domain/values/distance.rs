use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity metric a collection ranks its vectors by.
///
/// Serializes to the names the Qdrant REST API expects (`"Dot"`, `"Cosine"`,
/// `"Euclid"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Distance {
    #[default]
    Dot,
    Cosine,
    Euclid,
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Dot => write!(f, "DOT"),
            Distance::Cosine => write!(f, "COSINE"),
            Distance::Euclid => write!(f, "EUCLID"),
        }
    }
}

impl FromStr for Distance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DOT" | "DOT_PRODUCT" => Ok(Distance::Dot),
            "COSINE" => Ok(Distance::Cosine),
            "EUCLID" | "EUCLIDEAN" => Ok(Distance::Euclid),
            _ => Err(DomainError::InvalidConfiguration(format!(
                "Unknown distance metric: {s}"
            ))),
        }
    }
}
