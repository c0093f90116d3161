//! Search strategy and heuristic selection, parsed from `<strategy>/<heuristic>`.

use serde::{Deserialize, Serialize};
use settle_eval::{Heuristic, ParseHeuristicError};
use thiserror::Error;

/// Order in which the frontier is drained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Oldest frontier entry first.
    #[default]
    BreadthFirst,
    /// Newest frontier entry first.
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BreadthFirst, Strategy::DepthFirst];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
        }
    }
}

/// Search configuration, fixed for the lifetime of a planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub heuristic: Heuristic,
}

impl SearchConfig {
    pub fn new(strategy: Strategy, heuristic: Heuristic) -> Self {
        Self {
            strategy,
            heuristic,
        }
    }

    /// Every strategy/heuristic combination.
    pub fn all() -> impl Iterator<Item = SearchConfig> {
        Strategy::ALL.into_iter().flat_map(|strategy| {
            Heuristic::ALL
                .into_iter()
                .map(move |heuristic| SearchConfig::new(strategy, heuristic))
        })
    }
}

// Parsing / printing

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown search strategy {0:?}, expected bfs, breadth-first, dfs or depth-first")]
    UnknownStrategy(String),
    #[error(transparent)]
    Heuristic(#[from] ParseHeuristicError),
    #[error("expected '<strategy>' or '<strategy>/<heuristic>', got {0:?}")]
    Malformed(String),
}

impl std::str::FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SearchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let mut ss = s.split('/');
        let strategy = match ss.next() {
            Some(part) if !part.trim().is_empty() => part.parse()?,
            _ => return Err(ConfigError::Malformed(s.to_string())),
        };
        let heuristic = match ss.next() {
            Some(part) => part.parse()?,
            None => Heuristic::default(),
        };
        if ss.next().is_some() {
            Err(ConfigError::Malformed(s.to_string()))
        } else {
            Ok(SearchConfig {
                strategy,
                heuristic,
            })
        }
    }
}

impl std::fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.strategy, self.heuristic)
    }
}

//////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        assert_eq!(
            "dfs".parse::<SearchConfig>().unwrap(),
            SearchConfig::new(Strategy::DepthFirst, Heuristic::Height)
        );
        assert_eq!(
            "breadth-first/clear-lines".parse::<SearchConfig>().unwrap(),
            SearchConfig::new(Strategy::BreadthFirst, Heuristic::ClearLines)
        );
    }

    #[test]
    fn test_parse_config_errors() {
        assert_eq!(
            "astar/height".parse::<SearchConfig>(),
            Err(ConfigError::UnknownStrategy("astar".to_string()))
        );
        assert_eq!(
            "bfs/holes".parse::<SearchConfig>(),
            Err(ConfigError::Heuristic(ParseHeuristicError(
                "holes".to_string()
            )))
        );
        assert_eq!(
            "bfs/height/x".parse::<SearchConfig>(),
            Err(ConfigError::Malformed("bfs/height/x".to_string()))
        );
        assert!(matches!(
            "".parse::<SearchConfig>(),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_display_config() {
        let cfg = SearchConfig::new(Strategy::DepthFirst, Heuristic::FillWells);
        assert_eq!(cfg.to_string(), "dfs/fill-wells");
        assert_eq!(cfg.to_string().parse::<SearchConfig>().unwrap(), cfg);
    }

    #[test]
    fn test_error_messages_name_the_bad_value() {
        let err = "bfs/wells".parse::<SearchConfig>().unwrap_err();
        assert!(err.to_string().contains("\"wells\""));
    }

    #[test]
    fn test_all_combinations() {
        let all: Vec<_> = SearchConfig::all().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], SearchConfig::default());
    }
}
