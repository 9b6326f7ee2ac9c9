//! Builds the request's audit attribution and attaches it as a
//! [`RequestScope`] extension for handlers to extract.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::Claims;
use crate::models::audit_context::{AuditContext, RequestScope};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Width of `audit_logs.changed_by`.
pub const MAX_ACTOR_ID_CHARS: usize = 100;
/// Width of `audit_logs.request_id`.
pub const MAX_REQUEST_ID_CHARS: usize = 100;

pub async fn attach_audit_context(mut req: Request, next: Next) -> Response {
    let actor_id = req
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.sub.clone())
        .unwrap_or_default();
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let ctx = audit_context_from_parts(req.headers(), peer, actor_id);
    tracing::debug!(
        actor_id = %ctx.actor_id,
        ip = %ctx.ip_address,
        request_id = %ctx.request_id,
        "audit context attached"
    );

    let scope = req
        .extensions()
        .get::<RequestScope>()
        .cloned()
        .unwrap_or_default()
        .set_audit_context(ctx);
    req.extensions_mut().insert(scope);

    next.run(req).await
}

pub fn audit_context_from_parts(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    actor_id: String,
) -> AuditContext {
    AuditContext {
        actor_id: truncate_chars(actor_id, MAX_ACTOR_ID_CHARS),
        ip_address: client_ip(headers, peer),
        user_agent: header_str(headers, header::USER_AGENT.as_str()),
        request_id: truncate_chars(
            header_str(headers, REQUEST_ID_HEADER),
            MAX_REQUEST_ID_CHARS,
        ),
    }
}

/// First hop of `X-Forwarded-For`, then `X-Real-IP`, then the socket peer.
/// Header values that are not an IP address (optionally with a port) are
/// skipped.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = header_str(headers, "x-forwarded-for");
    let first_hop = forwarded
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .and_then(parse_ip);

    first_hop
        .or_else(|| parse_ip(header_str(headers, "x-real-ip").trim()))
        .or_else(|| peer.map(|addr| addr.ip()))
        .map(|ip| ip.to_string())
        .unwrap_or_default()
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    value
        .parse::<IpAddr>()
        .ok()
        .or_else(|| value.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}

/// Postgres `VARCHAR(n)` counts characters, not bytes.
fn truncate_chars(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        value
    } else {
        value.chars().take(max).collect()
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
