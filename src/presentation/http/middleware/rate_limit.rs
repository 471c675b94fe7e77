// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

pub use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};

/// Per-IP limiter for the account endpoints (signup, login, logout, follow).
///
/// `PeerIpKeyExtractor` keys on the socket address only. Use
/// `SmartIpKeyExtractor` when a trusted proxy sets `X-Forwarded-For`.
/// Returns `None` if the governor configuration is rejected, in which case
/// the routes are served unthrottled.
pub fn rate_limit_layer<K: KeyExtractor>(
    extractor: K,
) -> Option<GovernorLayer<K, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(2);
    builder.burst_size(10);
    match builder.key_extractor(extractor).finish() {
        Some(config) => Some(GovernorLayer::new(config)),
        None => {
            tracing::warn!("invalid rate limit configuration; accounts are unthrottled");
            None
        }
    }
}
