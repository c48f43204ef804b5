/// Request statistics for upstream API clients
///
/// Tracked per client instance and surfaced by the debug tools; the service
/// itself only reads these under debug logging.
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct ApiStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub average_response_time_ms: f64,
}

pub struct ApiStatsTracker {
    stats: RwLock<ApiStats>,
}

impl ApiStatsTracker {
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(ApiStats::default()),
        }
    }

    /// Record one finished request and fold its response time into the
    /// running average.
    pub async fn record_request(&self, success: bool, response_time_ms: f64) {
        let mut stats = self.stats.write().await;
        stats.total_requests += 1;
        if success {
            stats.successful_requests += 1;
        } else {
            stats.failed_requests += 1;
        }

        let n = stats.total_requests as f64;
        stats.average_response_time_ms =
            (stats.average_response_time_ms * (n - 1.0) + response_time_ms) / n;
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.read().await.clone()
    }
}

impl Default for ApiStatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counters_and_running_average() {
        let tracker = ApiStatsTracker::new();
        tracker.record_request(true, 100.0).await;
        tracker.record_request(false, 300.0).await;

        let stats = tracker.get_stats().await;
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert!((stats.average_response_time_ms - 200.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_fresh_tracker_is_zeroed() {
        let stats = ApiStatsTracker::new().get_stats().await;
        assert_eq!(stats.total_requests, 0);
        assert_eq!(stats.average_response_time_ms, 0.0);
    }
}
