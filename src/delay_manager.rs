use log::debug;
use std::thread;
use std::time::Duration;

/// Fixed pauses that keep the run under the search API's rate limits.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    pub page_delay: Duration,
    pub query_delay: Duration,
}

impl Throttle {
    pub fn new(page_delay: Duration, query_delay: Duration) -> Self {
        Throttle {
            page_delay,
            query_delay,
        }
    }

    /// No pauses at all.
    pub fn none() -> Self {
        Throttle::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn page_pause(&self) {
        pause(self.page_delay, "Page Delay");
    }

    pub fn query_pause(&self) {
        pause(self.query_delay, "Query Delay");
    }
}

fn pause(delay: Duration, label: &str) {
    if delay.is_zero() {
        return;
    }
    debug!("Waiting for {} ms ({})...", delay.as_millis(), label);
    thread::sleep(delay);
}
