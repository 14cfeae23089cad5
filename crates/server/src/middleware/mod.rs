//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction per route)
//! 2. `TraceLayer` (opens the `http_request` span)
//! 3. Request ID (records into that span)
//! 4. Security headers
//!
//! [`ClientInfo`] is an extractor rather than a layer; only visit tracking needs it.

pub mod client_info;
pub mod request_id;
pub mod security_headers;

pub use client_info::ClientInfo;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
