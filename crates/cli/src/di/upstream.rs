use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tubegate_application::ports::UpstreamClient;
use tubegate_domain::Config;
use tubegate_infrastructure::upstream::YouTubeClient;

pub fn build_upstream(config: &Config) -> anyhow::Result<Arc<dyn UpstreamClient>> {
    let client = YouTubeClient::new(
        config.upstream.base_url.clone(),
        config.upstream.api_key.clone(),
        Duration::from_millis(config.upstream.timeout_ms),
    )?;

    info!(
        base_url = %config.upstream.base_url,
        timeout_ms = config.upstream.timeout_ms,
        "Upstream client ready"
    );

    Ok(Arc::new(client))
}
