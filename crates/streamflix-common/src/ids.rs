//! Typed ID wrappers.
//!
//! Movies are identified by the store's numeric primary key. The newtype keeps
//! it from being mixed up with vote counts, runtimes, or external ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable numeric identifier for a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(i64);

impl MovieId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MovieId> for i64 {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(MovieId::new(7).to_string(), "7");
        assert_eq!(MovieId::new(1234567890).to_string(), "1234567890");
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<MovieId>().unwrap(), MovieId::new(42));
        assert!("the-matrix".parse::<MovieId>().is_err());
        assert!("".parse::<MovieId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&MovieId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: MovieId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 42);
    }
}
