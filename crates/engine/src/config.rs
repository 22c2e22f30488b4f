//! Runtime configuration from `HAROLD_*` environment variables.

use std::path::PathBuf;

use harold_core::SatMode;

pub const DEFAULT_SCOREBOARD_PATH: &str = "scoreboard.txt";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
    /// Draw collision corners
    pub debug: bool,
    pub sat_mode: SatMode,
    /// High-score file; `None` keeps scores in memory only
    pub scoreboard_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            debug: false,
            sat_mode: SatMode::TesterEdges,
            scoreboard_path: Some(PathBuf::from(DEFAULT_SCOREBOARD_PATH)),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let flag = |key: &str| value(key).map(|s| parse_flag(&s)).unwrap_or(false);

        let seed = value("HAROLD_SEED").and_then(|s| s.parse().ok());

        let sat_mode = if flag("HAROLD_STRICT_SAT") {
            SatMode::Symmetric
        } else {
            SatMode::TesterEdges
        };

        // Set-but-empty disables persistence; unset uses the default file.
        let scoreboard_path = match lookup("HAROLD_SCOREBOARD_PATH") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => Some(PathBuf::from(DEFAULT_SCOREBOARD_PATH)),
        };

        Self {
            seed,
            debug: flag("HAROLD_DEBUG"),
            sat_mode,
            scoreboard_path,
            log_path: value("HAROLD_LOG_PATH").map(PathBuf::from),
            log_filter: value("HAROLD_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), GameConfig::default());
    }

    #[test]
    fn parses_every_variable() {
        let c = config(&[
            ("HAROLD_SEED", "42"),
            ("HAROLD_DEBUG", "true"),
            ("HAROLD_STRICT_SAT", "1"),
            ("HAROLD_SCOREBOARD_PATH", " /tmp/scores.txt "),
            ("HAROLD_LOG_PATH", "harold.log"),
            ("HAROLD_LOG", "debug"),
        ]);
        assert_eq!(c.seed, Some(42));
        assert!(c.debug);
        assert_eq!(c.sat_mode, SatMode::Symmetric);
        assert_eq!(c.scoreboard_path, Some(PathBuf::from("/tmp/scores.txt")));
        assert_eq!(c.log_path, Some(PathBuf::from("harold.log")));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config(&[("HAROLD_SEED", "soon"), ("HAROLD_DEBUG", "maybe"), ("HAROLD_LOG", "  ")]);
        assert_eq!(c.seed, None);
        assert!(!c.debug);
        assert_eq!(c.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn empty_scoreboard_path_disables_persistence() {
        let c = config(&[("HAROLD_SCOREBOARD_PATH", "")]);
        assert_eq!(c.scoreboard_path, None);
    }

    #[test]
    fn from_env_does_not_panic() {
        let _ = GameConfig::from_env();
    }
}
