pub const JOB_PHRASES: &[&str] = &[
    "hiring",
    "looking for",
    "open position",
    "join our team",
    "need",
    "contract role",
    "freelance",
    "remote role",
];

pub const TECH_ROLES: &[&str] = &[
    "developer", "software engineer", "backend engineer", "frontend engineer",
    "full stack developer", "mobile developer", "ios developer", "android developer",
    "qa engineer", "test engineer", "devops engineer", "data scientist", "data engineer",
    "ml engineer", "ai engineer", "prompt engineer", "llm engineer", "nlp engineer",
    "cloud engineer", "cloud architect", "solutions architect", "security engineer",
    "cybersecurity analyst", "network engineer", "database administrator",
    "systems analyst", "technical support engineer", "site reliability engineer",
    "web scraper", "scraping engineer", "automation engineer", "ui designer",
    "ux designer", "ui/ux designer", "product designer", "web designer",
    "python developer", "javascript developer", "typescript developer",
    "react developer", "node.js developer", "golang developer",
    "php developer", "ruby developer", "html/css developer",
];

pub const OUTSOURCING_KEYWORDS: &[&str] = &[
    "looking to outsource", "outsourcing partner", "offshore team", "nearshore team",
    "remote development team", "outsourced developers", "offshore developers",
    "remote staffing", "need development partner", "hiring agency", "development agency",
    "freelance team", "external vendor", "white label development", "external dev team",
    "need remote engineers", "augment our team", "external workforce", "staff augmentation",
    "partner with agency", "consulting partner", "outsourcing IT", "BPO partner",
    "we need remote engineers", "seeking tech partner", "scaling remotely",
    "software development partner", "remote software team", "IT outsourcing",
    "dedicated development team", "offshore software team", "hire remote developers",
    "software vendor",
];

pub fn build_query(phrase: &str, role: &str, keyword: &str) -> String {
    format!(r#"site:linkedin.com/posts/ "{}" "{}" "{}""#, phrase, role, keyword)
}

/// Every phrase × role × keyword combination, phrase-major.
///
/// `limit` keeps only the first `limit` queries of that order.
pub fn generate_queries(limit: Option<usize>) -> Vec<String> {
    let all = JOB_PHRASES.iter().flat_map(|phrase| {
        TECH_ROLES.iter().flat_map(move |role| {
            OUTSOURCING_KEYWORDS
                .iter()
                .map(move |keyword| build_query(phrase, role, keyword))
        })
    });

    match limit {
        Some(n) => all.take(n).collect(),
        None => all.collect(),
    }
}
