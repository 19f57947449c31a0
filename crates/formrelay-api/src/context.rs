/// API Context - shared state for all API handlers
use formrelay_core::ContactRelay;
use formrelay_core::models::RelaySettings;
use lambda_http::Error;
use std::sync::Arc;
use tracing::info;

/// Immutable per-instance state; requests share nothing else
pub struct ApiContext {
    pub relay: ContactRelay,
}

impl ApiContext {
    /// Create a new API context from the deployment environment
    ///
    /// Malformed deployment settings abort the cold start; missing delivery
    /// credentials do not, they are reported on each request instead.
    pub async fn new() -> Result<Arc<Self>, Error> {
        let settings = RelaySettings::from_env()?;

        info!(
            provider = %settings.provider,
            verify_domain = settings.verify_domain,
            "Loaded relay settings"
        );

        let relay = ContactRelay::from_settings(settings).await;

        Ok(Arc::new(Self { relay }))
    }

    pub fn from_relay(relay: ContactRelay) -> Arc<Self> {
        Arc::new(Self { relay })
    }
}
