use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

/// Placeholder for data that could not be extracted or resolved.
pub const UNKNOWN: &str = "unknown";

/// One entry of the search API `items` array. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// A post that passed every filter and was enriched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub post_date: Option<NaiveDate>,
    pub author: String,
    pub company: String,
    pub company_size: String,
}

impl SearchResult {
    pub fn date_string(&self) -> String {
        self.post_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Links already written during this run.
#[derive(Debug, Default)]
pub struct SeenLinks {
    links: HashSet<String>,
}

impl SeenLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    /// Returns `false` when the link was already present.
    pub fn insert(&mut self, link: &str) -> bool {
        self.links.insert(link.to_string())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
