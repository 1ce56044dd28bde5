//! Hop-by-hop header filtering.
//!
//! # Responsibilities
//! - Keep the denylist as a named constant, not inline literals
//! - Forward every other header unchanged, duplicates included
//!
//! # Design Decisions
//! - Comparison is case-insensitive; `HeaderName` is already lowercase so
//!   membership checks are plain string equality.
//! - `content-length` is dropped here and recomputed by the outbound HTTP
//!   stack, since the body may be re-framed in transit.

use axum::http::HeaderMap;

/// Headers meaningful only for a single transport leg. Never relayed.
pub const HOP_BY_HOP_HEADERS: [&str; 6] = [
    "host",
    "connection",
    "keep-alive",
    "transfer-encoding",
    "upgrade",
    "content-length",
];

/// Pure filter: copy every inbound header except the hop-by-hop set.
pub fn filter_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound.iter() {
        if HOP_BY_HOP_HEADERS.contains(&name.as_str()) {
            continue;
        }
        outbound.append(name.clone(), value.clone());
    }
    outbound
}
