//! Canonical unordered node pairs
//!
//! Undirected edges and pair-keyed tables store their endpoints in a
//! fixed (min, max) order, so (Alice, Bob) and (Bob, Alice) always hit
//! the same entry.

/// An unordered pair of node identities stored in (min, max) order.
///
/// Equality and hashing derive from the ordered fields, so no two
/// representations of the same undirected pair can coexist in a map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePair {
    small: String,
    large: String,
}

impl NodePair {
    /// Create a canonical pair from two endpoints, in either order
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let a = a.into();
        let b = b.into();
        if a <= b {
            Self { small: a, large: b }
        } else {
            Self { small: b, large: a }
        }
    }

    /// The lexicographically smaller endpoint
    pub fn small(&self) -> &str {
        &self.small
    }

    /// The lexicographically larger endpoint
    pub fn large(&self) -> &str {
        &self.large
    }

    /// True when both endpoints are the same identity (a self-pair)
    pub fn is_self_pair(&self) -> bool {
        self.small == self.large
    }
}
