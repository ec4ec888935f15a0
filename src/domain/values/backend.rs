use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Concrete vector-search service a store talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Qdrant,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Qdrant => write!(f, "qdrant"),
        }
    }
}

impl FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qdrant" => Ok(Backend::Qdrant),
            _ => Err(DomainError::InvalidConfiguration(format!(
                "Unknown backend: {s}"
            ))),
        }
    }
}
