use std::future::Future;

use crate::domain::upstream::entities::{TransportError, UpstreamRequest, UpstreamResponse};

/// Transport used to reach the upstream provider. Implementations return every
/// HTTP response they receive, whatever its status, and never look at the body.
#[cfg_attr(test, mockall::automock)]
pub trait UpstreamTransport: Send + Sync {
    fn post_json(
        &self,
        request: UpstreamRequest,
    ) -> impl Future<Output = Result<UpstreamResponse, TransportError>> + Send;
}
