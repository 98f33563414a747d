//! Health check behind the status dot.

use predictor_core::{ApiBase, HealthStatus};

use super::client_for;

/// `GET {base}/health`; never fails, only reports up or down.
pub async fn check_health(base: ApiBase) -> HealthStatus {
    let status = client_for(base.clone()).check_health().await;
    match status {
        HealthStatus::Up => log::info!("💚 Service reachable at {}", base),
        _ => log::warn!("Service not reachable at {}", base),
    }
    status
}
