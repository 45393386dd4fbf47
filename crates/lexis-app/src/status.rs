/// Lookup counters for the current session
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupStats {
    pub lookups: u64,
    pub found: u64,
    pub not_found: u64,
    pub failures: u64,
    /// Lookups that changed the chart
    pub charted: u64,
}

impl LookupStats {
    pub fn log_summary(&self) {
        tracing::info!(
            lookups = self.lookups,
            found = self.found,
            not_found = self.not_found,
            failures = self.failures,
            charted = self.charted,
            "Session finished"
        );
    }
}
