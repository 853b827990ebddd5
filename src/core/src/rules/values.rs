use crate::{LeagueError, LeagueResult};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Flat `key = value` configuration bundle.
///
/// Blank lines and lines starting with `#` are skipped, as are lines without
/// an `=`. Keys and values are trimmed; a repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValues {
    values: BTreeMap<String, String>,
}

impl KeyValues {
    pub fn parse(text: &str) -> Self {
        let values = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, raw)| (key.trim().to_string(), raw.trim().to_string()))
            .collect();

        KeyValues { values }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Typed lookup falling back to `default` when the key is absent.
    /// A present but unparseable value is a configuration error.
    pub fn get_or<T: FromStr>(&self, key: &str, default: T) -> LeagueResult<T> {
        match self.raw(key) {
            None => Ok(default),
            Some(raw) => raw
                .replace('_', "")
                .parse::<T>()
                .map_err(|_| LeagueError::Config(format!("invalid value '{}' for '{}'", raw, key))),
        }
    }
}
