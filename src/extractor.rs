use chrono::NaiveDate;
use regex::Regex;
use scraper::Html;

use crate::models::UNKNOWN;

/// Regex-driven field extraction for search items and lookup pages.
#[derive(Clone)]
pub struct Extractor {
    date_regex: Regex,
    author_regex: Regex,
    company_regex: Regex,
    employees_regex: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Extractor {
            // "Sep 5, 2025"; full month names match but are rejected below
            date_regex: Regex::new(r"([A-Za-z]{3,9})\s(\d{1,2}),\s(\d{4})")?,
            author_regex: Regex::new(r"linkedin\.com/posts/([^/?#]+)")?,
            company_regex: Regex::new(r"linkedin\.com/company/([^/?#]+)/posts?")?,
            employees_regex: Regex::new(r"(?i)([\d,]+)\s+employees")?,
        })
    }

    /// Post date from the first `<Month> <day>, <year>` occurrence in the text.
    ///
    /// Only the first occurrence is considered, and its month must be a
    /// three-letter abbreviation ("Sep", not "September" or "Sept"). If it is
    /// not a real calendar date the result is `None` even when a later
    /// occurrence would parse.
    pub fn extract_post_date(&self, text: &str) -> Option<NaiveDate> {
        let caps = self.date_regex.captures(text)?;
        if caps[1].len() != 3 {
            return None;
        }
        let candidate = format!("{} {}, {}", &caps[1], &caps[2], &caps[3]);
        NaiveDate::parse_from_str(&candidate, "%b %d, %Y").ok()
    }

    /// `(author, company)` slugs taken from the shape of a LinkedIn URL.
    pub fn extract_author_and_company(&self, link: &str) -> (String, String) {
        let link = link.to_lowercase();

        let author = self
            .author_regex
            .captures(&link)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let company = self
            .company_regex
            .captures(&link)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        (author, company)
    }

    /// The number in the first "N employees" phrase of a page.
    ///
    /// Raw markup is scanned first; if the number and the word are split by
    /// tags, the visible text is scanned as a fallback.
    pub fn extract_employee_count(&self, html: &str) -> Option<String> {
        if let Some(count) = self.first_employee_count(html) {
            return Some(count);
        }

        let document = Html::parse_document(html);
        let text = document.root_element().text().collect::<Vec<_>>().join(" ");
        self.first_employee_count(&text)
    }

    fn first_employee_count(&self, text: &str) -> Option<String> {
        self.employees_regex
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}
