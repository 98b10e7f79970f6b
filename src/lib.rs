pub mod config;
pub mod delay_manager;
pub mod employer_lookup;
pub mod error;
pub mod extractor;
pub mod filters;
pub mod logger;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod queries;
pub mod search_engine;

// Exporting types for convenience
pub use config::Config;
pub use employer_lookup::{EmployerSearch, EmployerSizeLookup};
pub use extractor::Extractor;
pub use models::{SearchItem, SearchResult, SeenLinks};
pub use pipeline::LeadPipeline;
pub use search_engine::{SearchBackend, SearchEngine};
