//! Search configuration.

/// Configuration for the complete-enumeration p-median search.
///
/// # Examples
///
/// ```
/// use u_pmedian::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_candidates(60)
///     .with_medians(3)
///     .with_workers(8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Size of the candidate pool. The first `candidates` points of the
    /// data set are the eligible facility locations.
    pub candidates: usize,

    /// Number of facilities to place (the `p` of p-median).
    pub medians: usize,

    /// Number of parallel workers. Fixed for the whole run; also bounds
    /// the parallelism of the distance-cache build.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidates: 60,
            medians: 3,
            workers: 1,
        }
    }
}

impl SearchConfig {
    pub fn with_candidates(mut self, n: usize) -> Self {
        self.candidates = n;
        self
    }

    pub fn with_medians(mut self, k: usize) -> Self {
        self.medians = k;
        self
    }

    pub fn with_workers(mut self, w: usize) -> Self {
        self.workers = w;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.candidates == 0 {
            return Err("candidates must be >= 1".into());
        }
        if self.medians == 0 {
            return Err("medians must be >= 1".into());
        }
        if self.medians > self.candidates {
            return Err(format!(
                "medians ({}) must not exceed candidates ({})",
                self.medians, self.candidates
            ));
        }
        if self.workers == 0 {
            return Err("workers must be >= 1".into());
        }
        Ok(())
    }
}
