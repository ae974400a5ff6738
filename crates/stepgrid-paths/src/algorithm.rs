//! Selecting a strategy by name.

use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::bidirectional::Bidirectional;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::greedy::GreedyBestFirst;
use crate::traits::SearchStrategy;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    GreedyBestFirst,
    AStar,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::Dijkstra,
        Self::GreedyBestFirst,
        Self::AStar,
        Self::Bidirectional,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::GreedyBestFirst => "greedy",
            Self::AStar => "astar",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Whether a found path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::BreadthFirst | Self::Dijkstra | Self::AStar)
    }

    /// A fresh, uninitialized strategy of this kind.
    pub fn build(self) -> Box<dyn SearchStrategy> {
        match self {
            Self::BreadthFirst => Box::new(BreadthFirst::new()),
            Self::DepthFirst => Box::new(DepthFirst::new()),
            Self::Dijkstra => Box::new(Dijkstra::new()),
            Self::GreedyBestFirst => Box::new(GreedyBestFirst::new()),
            Self::AStar => Box::new(AStar::new()),
            Self::Bidirectional => Box::new(Bidirectional::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "greedy" | "greedy-best-first" => Ok(Self::GreedyBestFirst),
            "astar" | "a*" => Ok(Self::AStar),
            "bidirectional" | "bidi" => Ok(Self::Bidirectional),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.key().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.key());
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bogo".to_string()))
        );
    }

    #[test]
    fn build_gives_matching_strategy() {
        let names: Vec<_> = Algorithm::ALL.iter().map(|a| a.build().name()).collect();
        assert_eq!(
            names,
            vec![
                "Breadth-First",
                "Depth-First",
                "Dijkstra",
                "Greedy Best-First",
                "A*",
                "Bidirectional",
            ]
        );
    }
}
