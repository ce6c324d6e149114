//! CLI configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tower_core::CharacterClass;

/// Everything the terminal host needs to set up a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Fixed seed for a reproducible run.
    pub seed: Option<u64>,
    /// Class to play. Prompted for when unset and not autoplaying.
    pub class: Option<CharacterClass>,
    /// Directory with `floors.ron`, `bestiary.ron`, and friends. The built-in
    /// tower is used when unset.
    pub content_dir: Option<PathBuf>,
    /// Delay for an action to land, in milliseconds.
    pub pacing_ms: Option<u64>,
    /// Let the heuristic provider play instead of reading stdin.
    pub autoplay: bool,
    /// Print events as JSON lines instead of text.
    pub events_json: bool,
    /// Write logs to a daily rolling file in this directory instead of stderr.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TOWER_SEED` - Seed for the run's dice (default: random)
    /// - `TOWER_CLASS` - `thief`, `mage`, or `swordsman` (default: prompt)
    /// - `TOWER_CONTENT_DIR` - Content directory (default: built-in tower)
    /// - `TOWER_PACING_MS` - Action delay in ms, `0` disables pacing (default: 1000)
    /// - `TOWER_AUTOPLAY` - Play with the heuristic provider (default: false)
    /// - `TOWER_EVENTS_JSON` - Emit events as JSON lines (default: false)
    /// - `TOWER_LOG_DIR` - Log to files in this directory (default: stderr)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: read_value(&lookup, "TOWER_SEED"),
            class: read_value(&lookup, "TOWER_CLASS"),
            content_dir: lookup("TOWER_CONTENT_DIR").map(PathBuf::from),
            pacing_ms: read_value(&lookup, "TOWER_PACING_MS"),
            autoplay: read_flag(&lookup, "TOWER_AUTOPLAY"),
            events_json: read_flag(&lookup, "TOWER_EVENTS_JSON"),
            log_dir: lookup("TOWER_LOG_DIR").map(PathBuf::from),
        }
    }
}

fn read_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

/// Accepts `true`/`false`, `1`/`0`, and a bare variable as "true".
fn read_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    match lookup(key) {
        Some(value) => match value.trim() {
            "" | "1" => true,
            "0" => false,
            other => other.parse().unwrap_or(false),
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), CliConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("TOWER_SEED", "42"),
            ("TOWER_CLASS", "Mage"),
            ("TOWER_CONTENT_DIR", "/srv/tower"),
            ("TOWER_PACING_MS", "0"),
            ("TOWER_AUTOPLAY", "1"),
            ("TOWER_EVENTS_JSON", "true"),
            ("TOWER_LOG_DIR", "/var/log/tower"),
        ]);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.class, Some(CharacterClass::Mage));
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/tower")));
        assert_eq!(config.pacing_ms, Some(0));
        assert!(config.autoplay);
        assert!(config.events_json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/tower")));
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = config_from(&[
            ("TOWER_SEED", "lots"),
            ("TOWER_CLASS", "paladin"),
            ("TOWER_AUTOPLAY", "maybe"),
        ]);
        assert_eq!(config.seed, None);
        assert_eq!(config.class, None);
        assert!(!config.autoplay);
    }

    #[test]
    fn bare_flag_counts_as_set() {
        assert!(config_from(&[("TOWER_AUTOPLAY", "")]).autoplay);
        assert!(!config_from(&[("TOWER_EVENTS_JSON", "0")]).events_json);
    }
}
