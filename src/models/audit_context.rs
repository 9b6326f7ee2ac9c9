//! Request attribution carried explicitly from the HTTP layer down to the
//! audit service.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditContext {
    pub actor_id: String,
    pub ip_address: String,
    pub user_agent: String,
    pub request_id: String,
}

/// The unit of work for one request.
///
/// Attaching an [`AuditContext`] returns a derived scope and leaves the
/// receiver untouched, so a handler can shadow attribution for a nested call
/// without affecting anything else holding the original scope.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    audit: Option<AuditContext>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_audit_context(&self, ctx: AuditContext) -> Self {
        Self { audit: Some(ctx) }
    }

    /// Returns the attached context, or an empty one with `false` when no
    /// attribution was ever set.
    pub fn get_audit_context(&self) -> (AuditContext, bool) {
        match &self.audit {
            Some(ctx) => (ctx.clone(), true),
            None => (AuditContext::default(), false),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestScope
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestScope>()
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(request_id: &str) -> AuditContext {
        AuditContext {
            actor_id: "42".into(),
            ip_address: "10.0.0.1".into(),
            user_agent: "curl/8".into(),
            request_id: request_id.into(),
        }
    }

    #[test]
    fn empty_scope_has_no_attribution() {
        let (found, present) = RequestScope::new().get_audit_context();
        assert!(!present);
        assert_eq!(found, AuditContext::default());
        assert!(found.actor_id.is_empty());
    }

    #[test]
    fn attached_context_is_returned() {
        let scope = RequestScope::new().set_audit_context(ctx("req-123"));
        let (found, present) = scope.get_audit_context();
        assert!(present);
        assert_eq!(found.request_id, "req-123");
    }

    #[test]
    fn attaching_does_not_mutate_the_original() {
        let base = RequestScope::new().set_audit_context(ctx("outer"));
        let derived = base.set_audit_context(ctx("inner"));

        assert_eq!(base.get_audit_context().0.request_id, "outer");
        assert_eq!(derived.get_audit_context().0.request_id, "inner");
    }

    #[tokio::test]
    async fn extractor_defaults_to_empty_scope() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let scope = RequestScope::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(!scope.get_audit_context().1);
    }
}
