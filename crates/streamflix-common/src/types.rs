//! Core type definitions for catalog queries and media assets.
//!
//! All enums serialize in lowercase so they can appear directly in query
//! strings such as `/movies?sort=rating`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ranked queries the catalog issues against the movie store.
///
/// Each variant fixes both the ordering field (always descending) and the
/// slice size, so the set of queries the store must answer is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedQuery {
    /// Highest `vote_average` first. Feeds the hero and "Top Rated".
    ByRating,
    /// Most recently created first. Feeds "Recently Added".
    ByRecency,
    /// Highest `vote_count` first. Feeds "Popular Movies".
    ByPopularity,
}

impl RankedQuery {
    /// Every query the landing page needs, in no particular order.
    pub const ALL: [RankedQuery; 3] = [Self::ByRating, Self::ByRecency, Self::ByPopularity];

    /// Maximum number of records the landing page asks for.
    pub const fn limit(self) -> u32 {
        match self {
            Self::ByRating => 5,
            Self::ByRecency | Self::ByPopularity => 12,
        }
    }

    /// The "view all" sort key for the same ranking dimension.
    pub const fn sort_key(self) -> SortKey {
        match self {
            Self::ByRating => SortKey::Rating,
            Self::ByRecency => SortKey::Recent,
            Self::ByPopularity => SortKey::Popular,
        }
    }
}

impl From<SortKey> for RankedQuery {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Recent => Self::ByRecency,
            SortKey::Popular => Self::ByPopularity,
            SortKey::Rating => Self::ByRating,
        }
    }
}

impl fmt::Display for RankedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByRating => write!(f, "by_rating"),
            Self::ByRecency => write!(f, "by_recency"),
            Self::ByPopularity => write!(f, "by_popularity"),
        }
    }
}

/// Sort key used by "view all" links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Recently added.
    Recent,
    /// Most voted.
    Popular,
    /// Highest rated.
    Rating,
}

impl SortKey {
    /// Query-string form of the key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "popular" => Ok(Self::Popular),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Kind of artwork attached to a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Portrait poster shown on carousel cards.
    Poster,
    /// Landscape backdrop shown behind the hero.
    Backdrop,
}

impl AssetKind {
    /// Logical `(width, height)` of the placeholder used when no art exists.
    pub const fn placeholder_size(self) -> (u32, u32) {
        match self {
            Self::Poster => (300, 450),
            Self::Backdrop => (1920, 1080),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poster => write!(f, "poster"),
            Self::Backdrop => write!(f, "backdrop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_query_limits() {
        assert_eq!(RankedQuery::ByRating.limit(), 5);
        assert_eq!(RankedQuery::ByRecency.limit(), 12);
        assert_eq!(RankedQuery::ByPopularity.limit(), 12);
    }

    #[test]
    fn test_sort_key_round_trip_through_query() {
        for key in [SortKey::Recent, SortKey::Popular, SortKey::Rating] {
            assert_eq!(RankedQuery::from(key).sort_key(), key);
        }
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("recent".parse::<SortKey>().unwrap(), SortKey::Recent);
        assert_eq!("POPULAR".parse::<SortKey>().unwrap(), SortKey::Popular);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert!("newest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_lowercase() {
        let json = serde_json::to_string(&SortKey::Rating).unwrap();
        assert_eq!(json, "\"rating\"");
    }

    #[test]
    fn test_placeholder_sizes() {
        assert_eq!(AssetKind::Poster.placeholder_size(), (300, 450));
        assert_eq!(AssetKind::Backdrop.placeholder_size(), (1920, 1080));
    }
}
