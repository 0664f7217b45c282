//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for form submissions.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens refilled per second (`RATE_LIMIT_PER_SECOND`)
/// - **Burst**: `burst_size` requests (`RATE_LIMIT_BURST`)
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Zero values
/// fall back to the governor defaults; configuration validation rejects them.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with connect info.
///
/// # Example
///
/// ```rust,ignore
/// let writes = Router::new()
///     .route("/articles/add", post(create_article))
///     .layer(rate_limit::layer(2, 20));
/// ```
pub fn layer(
    per_second: u64,
    burst_size: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .unwrap_or_default(),
    );

    GovernorLayer::new(governor_conf)
}
