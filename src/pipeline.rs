use chrono::NaiveDate;
use log::{error, info, warn};

use crate::delay_manager::Throttle;
use crate::employer_lookup::EmployerSizeLookup;
use crate::error::LookupError;
use crate::extractor::Extractor;
use crate::filters::{self, SkipReason};
use crate::models::{SearchItem, SearchResult, SeenLinks, UNKNOWN};
use crate::search_engine::{SearchBackend, PAGE_SIZE};

/// Search, filter and enrich leads for a list of queries.
pub struct LeadPipeline<S, L> {
    search: S,
    lookup: L,
    extractor: Extractor,
    date_threshold: NaiveDate,
    max_results_per_query: usize,
    throttle: Throttle,
}

impl<S, L> LeadPipeline<S, L>
where
    S: SearchBackend,
    L: EmployerSizeLookup,
{
    pub fn new(
        search: S,
        lookup: L,
        extractor: Extractor,
        date_threshold: NaiveDate,
        max_results_per_query: usize,
        throttle: Throttle,
    ) -> Self {
        LeadPipeline {
            search,
            lookup,
            extractor,
            date_threshold,
            max_results_per_query,
            throttle,
        }
    }

    /// Runs every query in order, sharing one `SeenLinks` across them.
    pub fn run(&self, queries: &[String], seen: &mut SeenLinks) -> Vec<SearchResult> {
        let mut all_results = Vec::new();
        let total = queries.len();

        for (i, query) in queries.iter().enumerate() {
            if i > 0 {
                self.throttle.query_pause();
            }

            info!("{}/{} Searching: {}", i + 1, total, query);
            let results = self.search_query(query, seen);
            info!("{} results kept", results.len());
            all_results.extend(results);
        }

        all_results
    }

    /// Pages through one query until enough results are kept, a page comes
    /// back empty, or the API fails.
    pub fn search_query(&self, query: &str, seen: &mut SeenLinks) -> Vec<SearchResult> {
        let mut kept = Vec::new();
        let mut start = 1;

        while kept.len() < self.max_results_per_query {
            let items = match self.search.fetch_page(query, start) {
                Ok(items) => items,
                Err(e) => {
                    error!("{}", e);
                    break;
                }
            };

            if items.is_empty() {
                break;
            }

            for item in &items {
                let title = item.title.as_deref().unwrap_or_default();
                match self.process_item(item, seen) {
                    Ok(result) => {
                        info!("Saved: {}", title);
                        kept.push(result);
                    }
                    Err(reason) => info!("Skipped ({}): {}", reason, title),
                }

                if kept.len() >= self.max_results_per_query {
                    break;
                }
            }

            start += PAGE_SIZE;
            self.throttle.page_pause();
        }

        kept
    }

    /// Applies the filters to a single item and, if it survives, enriches it
    /// and records its link as seen.
    pub fn process_item(
        &self,
        item: &SearchItem,
        seen: &mut SeenLinks,
    ) -> Result<SearchResult, SkipReason> {
        let link = item.link.as_deref().ok_or(SkipReason::MissingLink)?;
        let title = item.title.as_deref().unwrap_or_default();
        let snippet = item.snippet.as_deref().unwrap_or_default();
        let full_text = format!("{} {}", title, snippet);

        if filters::is_blog_url(link) {
            return Err(SkipReason::BlogUrl);
        }
        if filters::is_blog_content(&full_text) {
            return Err(SkipReason::BlogContent);
        }

        let post_date = self
            .extractor
            .extract_post_date(snippet)
            .filter(|date| *date >= self.date_threshold)
            .ok_or(SkipReason::NoRecentDate)?;

        if filters::mentions_excluded_region(&full_text) {
            return Err(SkipReason::ExcludedRegion);
        }
        if seen.contains(link) {
            return Err(SkipReason::Duplicate);
        }

        let (author, company) = self.extractor.extract_author_and_company(link);
        let company_size = self.employer_size(&company);
        seen.insert(link);

        Ok(SearchResult {
            title: title.to_string(),
            link: link.to_string(),
            snippet: snippet.to_string(),
            post_date: Some(post_date),
            author,
            company,
            company_size,
        })
    }

    /// Employee count for a company slug, or the sentinel when it cannot be
    /// resolved. No request is made for an unknown company.
    fn employer_size(&self, company: &str) -> String {
        if company == UNKNOWN {
            return UNKNOWN.to_string();
        }

        match self.lookup.lookup(company) {
            Ok(size) => size,
            Err(LookupError::NoMatch) => {
                info!("No employee count found for {}", company);
                UNKNOWN.to_string()
            }
            Err(e) => {
                warn!("Employer size lookup failed for {}: {}", company, e);
                UNKNOWN.to_string()
            }
        }
    }
}
