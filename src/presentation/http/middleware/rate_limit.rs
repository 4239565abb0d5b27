// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type LoginRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the login route: `burst` attempts up front, then
/// one more every `replenish_secs`. `None` when the builder rejects a zero
/// quota.
pub fn login_rate_limit(replenish_secs: u64, burst: u32) -> Option<LoginRateLimit> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(replenish_secs);
    builder.burst_size(burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
