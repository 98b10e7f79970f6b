use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Duration;

use crate::error::LookupError;
use crate::extractor::Extractor;

pub const WEB_SEARCH_URL: &str = "https://www.google.com/search";

/// Resolves a company slug to an employee count such as `"1,200"`.
pub trait EmployerSizeLookup {
    fn lookup(&self, company: &str) -> Result<String, LookupError>;
}

/// Best-effort lookup that scrapes a generic web search results page.
pub struct EmployerSearch {
    client: Client,
    base_url: String,
    extractor: Extractor,
}

impl EmployerSearch {
    pub fn new(timeout: Duration, extractor: Extractor) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(EmployerSearch {
            client,
            base_url: WEB_SEARCH_URL.to_string(),
            extractor,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn lookup_url(&self, company: &str) -> String {
        let query = format!("{} number of employees", company);
        format!("{}?q={}", self.base_url, urlencoding::encode(&query))
    }
}

const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
];

fn random_user_agent() -> &'static str {
    USER_AGENTS[rand::thread_rng().gen_range(0..USER_AGENTS.len())]
}

impl EmployerSizeLookup for EmployerSearch {
    fn lookup(&self, company: &str) -> Result<String, LookupError> {
        let resp = self
            .client
            .get(self.lookup_url(company))
            .header(USER_AGENT, random_user_agent())
            .send()?;

        let status = resp.status();
        if status.as_u16() != 200 {
            return Err(LookupError::BadStatus(status.as_u16()));
        }

        let html = resp.text()?;
        self.extractor
            .extract_employee_count(&html)
            .ok_or(LookupError::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_engine::mock::TestServer;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn search_against(server: &TestServer) -> EmployerSearch {
        EmployerSearch::new(Duration::from_secs(5), Extractor::new().unwrap())
            .unwrap()
            .with_base_url(server.url("/search"))
    }

    fn respond(server: &TestServer, company: &str, response: ResponseTemplate) {
        server.mount(
            Mock::given(method("GET"))
                .and(path("/search"))
                .and(query_param("q", format!("{} number of employees", company)))
                .respond_with(response),
        );
    }

    #[test]
    fn test_lookup_finds_employee_count() {
        let server = TestServer::start();
        respond(
            &server,
            "acme",
            ResponseTemplate::new(200).set_body_string("<div>Acme Corp · 2,500 employees</div>"),
        );
        assert_eq!(search_against(&server).lookup("acme").unwrap(), "2,500");
    }

    #[test]
    fn test_lookup_bad_status() {
        let server = TestServer::start();
        respond(&server, "acme", ResponseTemplate::new(429).set_body_string("unusual traffic"));
        let err = search_against(&server).lookup("acme").unwrap_err();
        assert!(matches!(err, LookupError::BadStatus(429)));
    }

    #[test]
    fn test_lookup_page_without_count() {
        let server = TestServer::start();
        respond(
            &server,
            "acme",
            ResponseTemplate::new(200).set_body_string("<p>Acme builds rockets</p>"),
        );
        let err = search_against(&server).lookup("acme").unwrap_err();
        assert!(matches!(err, LookupError::NoMatch));
    }

    #[test]
    fn test_random_user_agent_is_a_browser() {
        assert!(random_user_agent().starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_lookup_url_encodes_query() {
        let search = EmployerSearch::new(Duration::from_secs(1), Extractor::new().unwrap())
            .unwrap()
            .with_base_url("http://localhost/search");
        assert_eq!(
            search.lookup_url("acme-corp"),
            "http://localhost/search?q=acme-corp%20number%20of%20employees"
        );
    }

    #[test]
    fn test_no_match_is_distinct_from_failure() {
        assert_eq!(LookupError::NoMatch.to_string(), "no employee count in response");
        assert_eq!(LookupError::BadStatus(503).to_string(), "lookup returned status 503");
    }
}
