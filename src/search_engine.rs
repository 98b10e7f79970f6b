use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

use crate::error::SearchError;
use crate::models::{SearchItem, SearchResponse};

pub const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Results per page returned by the search API; the offset advances by this.
pub const PAGE_SIZE: usize = 10;

/// Source of paginated search results.
pub trait SearchBackend {
    /// One page of items starting at the 1-based offset `start`.
    fn fetch_page(&self, query: &str, start: usize) -> Result<Vec<SearchItem>, SearchError>;
}

/// Google Custom Search JSON API client.
pub struct SearchEngine {
    client: Client,
    endpoint: String,
    api_key: String,
    cse_id: String,
}

impl SearchEngine {
    pub fn new(api_key: &str, cse_id: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(SearchEngine {
            client,
            endpoint: CUSTOM_SEARCH_URL.to_string(),
            api_key: api_key.to_string(),
            cse_id: cse_id.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl SearchBackend for SearchEngine {
    fn fetch_page(&self, query: &str, start: usize) -> Result<Vec<SearchItem>, SearchError> {
        debug!("Fetching results {}..{} for {}", start, start + PAGE_SIZE - 1, query);

        let start = start.to_string();
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("cx", self.cse_id.as_str()),
                ("start", start.as_str()),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            return Err(SearchError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        parse_search_response(&body)
    }
}

/// Items of a search API response body. A body without `items` is an empty page.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchItem>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.items)
}



#[cfg(test)]
mod http_tests {
    use super::mock::TestServer;
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn engine(server: &TestServer) -> SearchEngine {
        SearchEngine::new("test-key", "test-cx")
            .unwrap()
            .with_endpoint(server.url("/customsearch/v1"))
    }

    #[test]
    fn test_fetch_page_sends_credentials_and_offset() {
        let server = TestServer::start();
        server.mount(
            Mock::given(method("GET"))
                .and(path("/customsearch/v1"))
                .and(query_param("q", "hiring rust developer"))
                .and(query_param("key", "test-key"))
                .and(query_param("cx", "test-cx"))
                .and(query_param("start", "11"))
                .respond_with(ResponseTemplate::new(200).set_body_string(
                    r#"{"items":[{"title":"Hiring","link":"https://www.linkedin.com/posts/a","snippet":"Sep 5, 2025"}]}"#,
                )),
        );

        let items = engine(&server).fetch_page("hiring rust developer", 11).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link.as_deref(), Some("https://www.linkedin.com/posts/a"));
    }

    #[test]
    fn test_fetch_page_bad_status() {
        let server = TestServer::start();
        server.mount(
            Mock::given(method("GET"))
                .and(path("/customsearch/v1"))
                .respond_with(ResponseTemplate::new(403).set_body_string("dailyLimitExceeded")),
        );

        let err = engine(&server).fetch_page("q", 1).unwrap_err();
        match err {
            SearchError::BadStatus { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "dailyLimitExceeded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_fetch_page_undecodable_body() {
        let server = TestServer::start();
        server.mount(
            Mock::given(method("GET"))
                .and(path("/customsearch/v1"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>")),
        );

        let err = engine(&server).fetch_page("q", 1).unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }
}
