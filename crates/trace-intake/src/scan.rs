//! Simulated QR scanning.
//!
//! No code is decoded; after the configured delay the scan resolves to the
//! sample batch, or to an explicitly supplied id.

use std::time::Duration;

use trace_core::catalog::SAMPLE_PRODUCE_ID;

/// Wait out the simulated scan and return the resolved produce id.
pub async fn simulate_scan(latency: Duration, explicit_id: Option<&str>) -> String {
    tokio::time::sleep(latency).await;
    let id = explicit_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(SAMPLE_PRODUCE_ID);
    tracing::debug!(produce_id = id, "scan resolved");
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resolves_to_sample_after_latency() {
        let started = tokio::time::Instant::now();
        let id = simulate_scan(Duration::from_millis(1500), None).await;
        assert_eq!(id, SAMPLE_PRODUCE_ID);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn explicit_id_wins_unless_blank() {
        assert_eq!(simulate_scan(Duration::ZERO, Some("prod-7")).await, "prod-7");
        assert_eq!(
            simulate_scan(Duration::ZERO, Some("  ")).await,
            SAMPLE_PRODUCE_ID
        );
    }
}
