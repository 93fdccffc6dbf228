//! Collected outcomes of one census run

use super::probe_result::ProbeResult;
use crate::core::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One reported line of a run: an endpoint and what probing it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeEntry {
    pub url: Endpoint,
    #[serde(flatten)]
    pub result: ProbeResult,
}

/// All probe outcomes of a run, in input order
///
/// Every input line gets its own entry, so a URL listed twice is reported
/// twice. Keyed lookups ([`ResultSet::get`], [`ResultSet::to_map`]) see the
/// last entry recorded for a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: Vec<ProbeEntry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome for an endpoint
    pub fn record(&mut self, url: Endpoint, result: ProbeResult) {
        self.entries.push(ProbeEntry { url, result });
    }

    pub fn entries(&self) -> &[ProbeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest result recorded for a URL
    pub fn get(&self, url: &Endpoint) -> Option<&ProbeResult> {
        self.entries
            .iter()
            .rev()
            .find(|entry| &entry.url == url)
            .map(|entry| &entry.result)
    }

    /// Keyed view of the run; later duplicates overwrite earlier ones
    pub fn to_map(&self) -> HashMap<&Endpoint, &ProbeResult> {
        self.entries
            .iter()
            .map(|entry| (&entry.url, &entry.result))
            .collect()
    }

    pub fn summary(&self) -> CensusSummary {
        let mut summary = CensusSummary {
            total: self.entries.len(),
            ..Default::default()
        };
        for entry in &self.entries {
            match entry.result.model_names() {
                Some(models) => {
                    summary.reachable += 1;
                    summary.models += models.len();
                }
                None => summary.failed += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ProbeEntry;
    type IntoIter = std::slice::Iter<'a, ProbeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Endpoint, ProbeResult)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (Endpoint, ProbeResult)>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for (url, result) in iter {
            set.record(url, result);
        }
        set
    }
}

/// Aggregate counts over a [`ResultSet`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusSummary {
    /// Number of reported entries
    pub total: usize,
    /// Entries that answered with a model list
    pub reachable: usize,
    /// Entries that ended in an error report
    pub failed: usize,
    /// Sum of model names over reachable entries
    pub models: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(url: &str) -> Endpoint {
        Endpoint::try_new(url).unwrap()
    }

    #[test]
    fn test_record_preserves_order() {
        let mut set = ResultSet::new();
        set.record(endpoint("http://b"), ProbeResult::models(vec![]));
        set.record(endpoint("http://a"), ProbeResult::error("down"));

        let urls: Vec<&str> = set.iter().map(|e| e.url.url()).collect();
        assert_eq!(urls, vec!["http://b", "http://a"]);
    }

    #[test]
    fn test_duplicates_reported_twice_last_write_wins() {
        let mut set = ResultSet::new();
        set.record(endpoint("http://a"), ProbeResult::error("first"));
        set.record(endpoint("http://a"), ProbeResult::models(vec!["m".into()]));

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get(&endpoint("http://a")),
            Some(&ProbeResult::models(vec!["m".into()]))
        );

        let map = set.to_map();
        assert_eq!(map.len(), 1);
        assert!(map[&endpoint("http://a")].is_success());
    }

    #[test]
    fn test_get_missing() {
        let set = ResultSet::new();
        assert!(set.get(&endpoint("http://nowhere")).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_summary() {
        let set: ResultSet = vec![
            (endpoint("http://a"), ProbeResult::models(vec!["x".into(), "y".into()])),
            (endpoint("http://b"), ProbeResult::models(vec![])),
            (endpoint("http://c"), ProbeResult::error("refused")),
        ]
        .into_iter()
        .collect();

        let summary = set.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.reachable, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.models, 2);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let mut set = ResultSet::new();
        set.record(endpoint("http://a"), ProbeResult::error("refused"));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json[0]["url"], "http://a");
        assert_eq!(json[0]["status"], "error_report");
        assert_eq!(json[0]["error"], "refused");
    }
}
