//! Client metadata extraction for visit logging.
//!
//! The site usually runs behind a reverse proxy, so the peer address is only
//! a last resort. Resolution order:
//!
//! 1. First entry of `X-Forwarded-For`
//! 2. `X-Real-IP`
//! 3. Socket peer address (when served with connect info)
//! 4. `"unknown"`

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header::USER_AGENT, request::Parts},
};

/// Placeholder for metadata the request does not carry.
pub const UNKNOWN: &str = "unknown";

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Best-effort description of the requesting client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: String,
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self {
            ip_address: resolve_client_ip(&parts.headers, peer),
            user_agent: resolve_user_agent(&parts.headers),
        })
    }
}

/// Resolve the client IP from proxy headers, falling back to the peer address.
#[must_use]
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get(X_REAL_IP)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .map(String::from)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// The `User-Agent` header, or `"unknown"` when absent or not valid text.
#[must_use]
pub fn resolve_user_agent(headers: &HeaderMap) -> String {
    headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), String::from)
}
