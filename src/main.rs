use lead_scraper_lib::delay_manager::Throttle;
use lead_scraper_lib::{logger, output, queries};
use lead_scraper_lib::{Config, EmployerSearch, Extractor, LeadPipeline, SearchEngine, SeenLinks};

use log::{error, info};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting LinkedIn lead search...");

    let config = Config::from_env().inspect_err(|e| error!("Configuration error: {}", e))?;

    let queries = queries::generate_queries(config.max_queries);
    info!(
        "{} queries, keeping posts dated on or after {}",
        queries.len(),
        config.date_threshold
    );

    let extractor = Extractor::new()?;
    let search = SearchEngine::new(&config.api_key, &config.cse_id)?;
    let lookup = EmployerSearch::new(config.lookup_timeout, extractor.clone())?;
    let pipeline = LeadPipeline::new(
        search,
        lookup,
        extractor,
        config.date_threshold,
        config.max_results_per_query,
        Throttle::new(config.page_delay, config.query_delay),
    );

    let mut seen = SeenLinks::new();
    let results = pipeline.run(&queries, &mut seen);

    output::save_results(&config.output_file, &results)?;
    info!(
        "Done. {} total filtered posts saved to '{}'",
        results.len(),
        config.output_file
    );
    Ok(())
}
