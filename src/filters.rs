//! Content and geography predicates applied to every search item.
//!
//! All matching is case-insensitive substring matching over the lowercased
//! text; callers pass `title + " " + snippet`.

pub const BLOG_URL_INDICATORS: &[&str] = &["/pulse/", "/articles/", "/blog/"];

pub const BLOG_KEYWORDS: &[&str] = &[
    "blog",
    "article",
    "guide",
    "how to",
    "tips",
    "tutorial",
    "opinion",
    "insights",
    "best practices",
    "case study",
    "how",
    "why",
    "when",
];

pub const EXCLUDED_REGIONS: &[&str] = &[
    // states
    "andhra pradesh", "arunachal pradesh", "assam", "bihar", "chhattisgarh",
    "goa", "gujarat", "haryana", "himachal pradesh", "jharkhand", "karnataka",
    "kerala", "madhya pradesh", "maharashtra", "manipur", "meghalaya",
    "mizoram", "nagaland", "odisha", "punjab", "rajasthan", "sikkim",
    "tamil nadu", "telangana", "tripura", "uttar pradesh", "uttarakhand",
    "west bengal",
    // union territories
    "andaman and nicobar islands", "chandigarh",
    "dadra and nagar haveli and daman and diu", "delhi", "lakshadweep",
    "puducherry", "ladakh", "jammu and kashmir",
    // cities
    "mumbai", "bangalore", "bengaluru", "hyderabad", "chennai", "kolkata",
    "pune", "ahmedabad", "jaipur", "lucknow", "kanpur", "nagpur", "indore",
    "thane", "bhopal", "patna", "vadodara", "agra", "nashik", "faridabad",
    "meerut", "rajkot", "varanasi", "surat", "gurgaon", "noida",
    // country
    "india",
];

/// Why an item was dropped. The `Display` form is what gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingLink,
    BlogUrl,
    BlogContent,
    NoRecentDate,
    ExcludedRegion,
    Duplicate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::MissingLink => "no link",
            SkipReason::BlogUrl => "article/blog URL",
            SkipReason::BlogContent => "blog-like content",
            SkipReason::NoRecentDate => "no/old date",
            SkipReason::ExcludedRegion => "excluded location",
            SkipReason::Duplicate => "duplicate",
        };
        f.write_str(s)
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    let text = text.to_lowercase();
    needles.iter().any(|n| text.contains(n))
}

pub fn is_blog_url(link: &str) -> bool {
    contains_any(link, BLOG_URL_INDICATORS)
}

pub fn is_blog_content(text: &str) -> bool {
    contains_any(text, BLOG_KEYWORDS)
}

pub fn mentions_excluded_region(text: &str) -> bool {
    contains_any(text, EXCLUDED_REGIONS)
}
