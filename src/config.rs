//! Redirect rules loaded from YAML or JSON.
//!
//! Both formats hold a sequence of entries with lowercase `path` and `url`
//! keys:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! ```json
//! [{ "path": "/some-path", "url": "https://www.some-url.com/demo" }]
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, warn};

use crate::error::{ConfigParseError, InvalidRule};
use crate::handlers::{Handler, MapHandler, PathMapping, map_handler};

/// One redirect rule: requests for `path` go to `url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MappingEntry {
    pub path: String,
    pub url: String,
}

/// Parses an inline `path=url` rule, splitting on the first `=`.
impl FromStr for MappingEntry {
    type Err = InvalidRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((path, url)) if !path.is_empty() => Ok(Self {
                path: path.to_string(),
                url: url.to_string(),
            }),
            _ => Err(InvalidRule(s.to_string())),
        }
    }
}

/// Parses a YAML sequence of entries. A null document yields no entries.
pub fn parse_yaml(yaml: &[u8]) -> Result<Vec<MappingEntry>, ConfigParseError> {
    let entries: Option<Vec<MappingEntry>> = serde_yaml::from_slice(yaml)?;
    Ok(entries.unwrap_or_default())
}

/// Parses a JSON array of entries. `null` yields no entries.
pub fn parse_json(json: &[u8]) -> Result<Vec<MappingEntry>, ConfigParseError> {
    let entries: Option<Vec<MappingEntry>> = serde_json::from_slice(json)?;
    Ok(entries.unwrap_or_default())
}

/// Collects entries into a lookup table. A later entry for the same path
/// replaces the earlier one.
pub fn build_map<I>(entries: I) -> PathMapping
where
    I: IntoIterator<Item = MappingEntry>,
{
    entries
        .into_iter()
        .map(|entry| (entry.path, entry.url))
        .collect()
}

/// Builds a redirect handler from YAML rules, see [`map_handler`].
pub fn yaml_handler<F: Handler>(
    yaml: &[u8],
    fallback: F,
) -> Result<MapHandler<F>, ConfigParseError> {
    load(parse_yaml(yaml), fallback)
}

/// Builds a redirect handler from JSON rules, see [`map_handler`].
pub fn json_handler<F: Handler>(
    json: &[u8],
    fallback: F,
) -> Result<MapHandler<F>, ConfigParseError> {
    load(parse_json(json), fallback)
}

fn load<F: Handler>(
    entries: Result<Vec<MappingEntry>, ConfigParseError>,
    fallback: F,
) -> Result<MapHandler<F>, ConfigParseError> {
    let entries = entries.inspect_err(|e| warn!("rejected redirect rules: {}", e))?;
    let count = entries.len();
    let paths = build_map(entries);
    info!("loaded {} redirect rules for {} paths", count, paths.len());
    Ok(map_handler(paths, fallback))
}
