//! Runtime configuration resolved from the environment.
//!
//! - `TRADEQ_HOME`: base directory, default `$HOME/.tradeq`
//! - `TRADEQ_DATA`: trade data file, default `$TRADEQ_HOME/trades.json`
//! - `TRADEQ_LOG`: tracing filter directive, default `warn`
//!
//! Empty values are treated as unset. `--data` overrides `TRADEQ_DATA`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "warn";
const DATA_FILE_NAME: &str = "trades.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub home: PathBuf,
    pub data_path: PathBuf,
    pub log_filter: String,
}

impl CliConfig {
    pub fn from_env(data_override: Option<PathBuf>) -> Self {
        Self::from_lookup(data_override, |name| env::var_os(name))
    }

    pub fn from_lookup<F>(data_override: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let home = non_empty("TRADEQ_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(".tradeq")))
            .unwrap_or_else(|| PathBuf::from(".tradeq"));

        let data_path = data_override
            .or_else(|| non_empty("TRADEQ_DATA").map(PathBuf::from))
            .unwrap_or_else(|| home.join(DATA_FILE_NAME));

        let log_filter = non_empty("TRADEQ_LOG")
            .and_then(|value| value.into_string().ok())
            .unwrap_or_else(|| String::from(DEFAULT_LOG_FILTER));

        Self {
            home,
            data_path,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), OsString::from(value)))
            .collect::<HashMap<_, _>>();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_under_home() {
        let config = CliConfig::from_lookup(None, lookup(&[("HOME", "/home/ann")]));
        assert_eq!(config.home, PathBuf::from("/home/ann/.tradeq"));
        assert_eq!(config.data_path, PathBuf::from("/home/ann/.tradeq/trades.json"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn tradeq_home_and_data_override_defaults() {
        let config = CliConfig::from_lookup(
            None,
            lookup(&[
                ("HOME", "/home/ann"),
                ("TRADEQ_HOME", "/srv/tradeq"),
                ("TRADEQ_LOG", "tradeq_core=debug"),
            ]),
        );
        assert_eq!(config.data_path, PathBuf::from("/srv/tradeq/trades.json"));
        assert_eq!(config.log_filter, "tradeq_core=debug");

        let config = CliConfig::from_lookup(None, lookup(&[("TRADEQ_DATA", "/tmp/t.json")]));
        assert_eq!(config.data_path, PathBuf::from("/tmp/t.json"));
    }

    #[test]
    fn flag_wins_over_env() {
        let config = CliConfig::from_lookup(
            Some(PathBuf::from("local.json")),
            lookup(&[("TRADEQ_DATA", "/tmp/t.json")]),
        );
        assert_eq!(config.data_path, PathBuf::from("local.json"));
    }

    #[test]
    fn empty_values_treated_as_absent() {
        let config = CliConfig::from_lookup(
            None,
            lookup(&[("TRADEQ_HOME", ""), ("TRADEQ_DATA", ""), ("TRADEQ_LOG", "")]),
        );
        assert_eq!(config.home, PathBuf::from(".tradeq"));
        assert_eq!(config.data_path, PathBuf::from(".tradeq/trades.json"));
        assert_eq!(config.log_filter, "warn");
    }
}
