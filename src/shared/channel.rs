/**
 * Channel Identity
 *
 * A two-party conversation on the chat provider is identified by a
 * deterministic key derived from both participants, so that either side
 * computes the same channel regardless of who initiates.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic identity of a two-party channel.
///
/// Derived by sorting the two participant ids lexicographically and joining
/// them with `-`. Invariant: `for_pair(a, b) == for_pair(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Derive the channel id for a pair of participants.
    pub fn for_pair(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        ChannelId(format!("{first}-{second}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_lexicographically() {
        assert_eq!(ChannelId::for_pair("b", "a").as_str(), "a-b");
        assert_eq!(ChannelId::for_pair("a", "b").as_str(), "a-b");
    }

    #[test]
    fn test_symmetric() {
        let left = ChannelId::for_pair("u1", "u2");
        let right = ChannelId::for_pair("u2", "u1");
        assert_eq!(left, right);
    }

    #[test]
    fn test_equal_participants() {
        assert_eq!(ChannelId::for_pair("u1", "u1").as_str(), "u1-u1");
    }

    #[test]
    fn test_display() {
        let id = ChannelId::for_pair("u9", "u10");
        // "u10" < "u9" lexicographically
        assert_eq!(id.to_string(), "u10-u9");
    }
}
