//! Station name → code table and the station-list scraper.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::StationCode;

/// Mapping from station display name to station code.
///
/// Serializes as a flat JSON object, which is also the on-disk cache format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationTable {
    stations: BTreeMap<String, StationCode>,
}

impl StationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. A name already present is overwritten, so when a list
    /// mentions the same name twice the last occurrence wins.
    pub fn insert(&mut self, name: impl Into<String>, code: StationCode) {
        self.stations.insert(name.into(), code);
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<StationCode> {
        self.stations.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate over every (name, code) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StationCode)> {
        self.stations.iter().map(|(name, code)| (name.as_str(), *code))
    }
}

impl FromIterator<(String, StationCode)> for StationTable {
    fn from_iter<I: IntoIterator<Item = (String, StationCode)>>(iter: I) -> Self {
        let mut table = StationTable::new();
        for (name, code) in iter {
            table.insert(name, code);
        }
        table
    }
}

/// One entry of `station_name.js`: `@bjp|北京|BJP|beijing|bjp|`.
fn entry_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"@[a-z]{3}\|([^|]+)\|([A-Z]{3})\|[a-z]+\|[a-z]+\|")
            .expect("station entry pattern is valid")
    })
}

/// Scrape a station table out of the station-list script.
///
/// Entries are taken in order of appearance; text that does not match the
/// entry shape is ignored.
pub fn parse_station_list(script: &str) -> StationTable {
    entry_pattern()
        .captures_iter(script)
        .filter_map(|caps| {
            let code = StationCode::parse(&caps[2]).ok()?;
            Some((caps[1].to_string(), code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn parses_single_entry() {
        let table = parse_station_list("@bjp|北京|BJP|beijing|bjp|");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("北京"), Some(code("BJP")));
    }

    #[test]
    fn parses_script_wrapper() {
        let script = "var station_names ='@bjb|北京北|VAP|beijingbei|bjb|0@bjd|北京东|BOP|beijingdong|bjd|1@gzn|广州南|IZQ|guangzhounan|gzn|2';";
        let table = parse_station_list(script);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("北京北"), Some(code("VAP")));
        assert_eq!(table.get("北京东"), Some(code("BOP")));
        assert_eq!(table.get("广州南"), Some(code("IZQ")));
    }

    #[test]
    fn last_duplicate_wins() {
        let table = parse_station_list("@aaa|珠海|ZHQ|zhuhai|zh|@bbb|珠海|ZIQ|zhuhai|zh|");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("珠海"), Some(code("ZIQ")));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let script = "@bjp|北京|bjp|beijing|bjp|@shh|上海|SHH|shanghai|sh|@xx|坏|BAD|bad|bad|";
        let table = parse_station_list(script);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("上海"), Some(code("SHH")));
    }

    #[test]
    fn empty_script_gives_empty_table() {
        assert!(parse_station_list("").is_empty());
        assert!(parse_station_list("var station_names = '';").is_empty());
    }

    #[test]
    fn lookup_is_exact() {
        let table = parse_station_list("@bjp|北京|BJP|beijing|bjp|");
        assert!(table.contains("北京"));
        assert!(!table.contains("北京 "));
        assert!(!table.contains("北"));
        assert_eq!(table.get("不存在的城市"), None);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut table = StationTable::new();
        table.insert("北京", code("BJP"));
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"北京":"BJP"}"#);

        let back: StationTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
