// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::{body::Body, http::Request};
use std::{
    net::{IpAddr, Ipv4Addr},
    sync::OnceLock,
};
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, SmartIpKeyExtractor},
};

pub type CredentialsRateLimit = GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware, Body>;

/// Keys requests by client IP, read from forwarding headers or the peer
/// address. Requests with no resolvable address share a single bucket
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIpKeyExtractor;

const UNRESOLVED_CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        Ok(SmartIpKeyExtractor.extract(req).unwrap_or_else(|_| {
            tracing::debug!("no client address; using the shared rate limit bucket");
            UNRESOLVED_CLIENT
        }))
    }
}

/// Per-client throttle for credential submissions (login and registration).
/// A client may send a burst of 10 and then one request every 2 seconds.
///
/// Returns `None` when the limiter could not be configured; the caller then
/// serves the routes unthrottled.
pub fn credentials_rate_limit() -> Option<CredentialsRateLimit> {
    static RATE_LIMITER: OnceLock<Option<CredentialsRateLimit>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(10);
            match builder.key_extractor(ClientIpKeyExtractor).finish() {
                Some(config) => Some(GovernorLayer::new(config)),
                None => {
                    tracing::error!("invalid rate limit configuration; throttling disabled");
                    None
                }
            }
        })
        .clone()
}
