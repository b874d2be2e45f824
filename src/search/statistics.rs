//! Search progress counters, logged through `tracing` the way the teacher's
//! search engines report theirs — minus memory sampling, which this crate
//! does not depend on anything for.

use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    expanded_nodes: u64,
    generated_nodes: u64,
    search_start_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            search_start_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, count: usize) {
        self.generated_nodes += count as u64;
    }

    pub fn finalize(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            search_duration = self.search_start_time.elapsed().as_secs_f64(),
            "search finished"
        );
    }
}
