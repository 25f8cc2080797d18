use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Search algorithm requested from the solver.
///
/// Serialized in lowercase (`"bfs"`, `"dfs"`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search; finds a shortest path.
    #[default]
    #[display("bfs")]
    Bfs,
    /// Depth-first search with randomised neighbour order.
    #[display("dfs")]
    Dfs,
}

impl Algorithm {
    /// All supported algorithms, in selector order.
    pub const ALL: [Self; 2] = [Self::Bfs, Self::Dfs];

    /// Human-readable label for selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS (Shortest Path)",
            Self::Dfs => "DFS (Depth-First)",
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown algorithm {name:?}, expected \"bfs\" or \"dfs\"")]
pub struct UnknownAlgorithm {
    name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| s.eq_ignore_ascii_case(&algorithm.to_string()))
            .ok_or_else(|| UnknownAlgorithm { name: s.to_owned() })
    }
}
