use std::fmt;

use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    upstream::{
        entities::{TransportError, UpstreamRequest, UpstreamResponse},
        ports::UpstreamTransport,
        retry::{RetryPolicy, retry_with_backoff},
    },
};

/// Why a single attempt did not count as a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    Status(UpstreamResponse),
    Transport(TransportError),
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Status(response) => write!(f, "HTTP status {}", response.status),
            AttemptFailure::Transport(err) => write!(f, "transport error: {}", err),
        }
    }
}

/// Result of one logical upstream call, retries included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Success(UpstreamResponse),
    /// Retries ran out; this is the last HTTP response that came back.
    ErrorResponse {
        response: UpstreamResponse,
        attempts: u32,
    },
    /// No attempt produced an HTTP response.
    Unreachable {
        attempts: u32,
        last_error: TransportError,
    },
}

impl CallOutcome {
    pub fn into_result(self) -> Result<UpstreamResponse, CoreError> {
        match self {
            CallOutcome::Success(response) => Ok(response),
            CallOutcome::ErrorResponse { response, attempts } => {
                error!(
                    attempts,
                    "Upstream API error: {} - {}", response.status, response.body
                );
                Err(CoreError::UpstreamError {
                    status: response.status,
                    body: response.body,
                })
            }
            CallOutcome::Unreachable {
                attempts,
                last_error,
            } => {
                error!(attempts, "Upstream request failed: {}", last_error);
                Err(CoreError::UpstreamUnreachable {
                    attempts,
                    message: last_error.message,
                })
            }
        }
    }
}

pub async fn call_with_retry<T>(
    transport: &T,
    policy: &RetryPolicy,
    request: UpstreamRequest,
) -> CallOutcome
where
    T: UpstreamTransport,
{
    let result = retry_with_backoff(policy, |attempt| {
        let request = request.clone();
        async move {
            debug!(attempt, url = %request.url, "Calling upstream");
            match transport.post_json(request).await {
                Ok(response) if response.is_success() => Ok(response),
                Ok(response) => Err(AttemptFailure::Status(response)),
                Err(err) => Err(AttemptFailure::Transport(err)),
            }
        }
    })
    .await;

    let exhausted = match result {
        Ok(response) => return CallOutcome::Success(response),
        Err(exhausted) => exhausted,
    };

    let attempts = exhausted.attempts();
    let mut last_error = None;

    for failure in exhausted.into_failures().into_iter().rev() {
        match failure {
            AttemptFailure::Status(response) => {
                return CallOutcome::ErrorResponse { response, attempts };
            }
            AttemptFailure::Transport(err) => {
                last_error.get_or_insert(err);
            }
        }
    }

    CallOutcome::Unreachable {
        attempts,
        last_error: last_error
            .unwrap_or_else(|| TransportError::new("no attempt was made")),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicU32, Ordering},
        },
        time::Duration,
    };

    use serde_json::json;

    use super::*;
    use crate::domain::upstream::ports::MockUpstreamTransport;

    fn request() -> UpstreamRequest {
        UpstreamRequest::new(
            "http://upstream.test/models/m:generateContent".to_string(),
            "key".to_string(),
            json!({ "contents": [] }),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_two_network_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let mut transport = MockUpstreamTransport::new();
        transport.expect_post_json().times(3).returning(move |_| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Box::pin(async move {
                if attempt < 3 {
                    Err(TransportError::new("connection refused"))
                } else {
                    Ok(UpstreamResponse::new(200, "{}"))
                }
            })
        });

        let outcome = call_with_retry(&transport, &RetryPolicy::default(), request()).await;

        assert_eq!(outcome, CallOutcome::Success(UpstreamResponse::new(200, "{}")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_network_is_unreachable() {
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_post_json()
            .times(3)
            .returning(|_| Box::pin(async { Err(TransportError::new("connection refused")) }));

        let outcome = call_with_retry(&transport, &RetryPolicy::default(), request()).await;

        assert_eq!(
            outcome.clone(),
            CallOutcome::Unreachable {
                attempts: 3,
                last_error: TransportError::new("connection refused"),
            }
        );
        assert!(matches!(
            outcome.into_result(),
            Err(CoreError::UpstreamUnreachable { attempts: 3, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_status_is_retried_and_reported() {
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_post_json()
            .times(3)
            .returning(|_| Box::pin(async { Ok(UpstreamResponse::new(500, "overloaded")) }));

        let outcome = call_with_retry(&transport, &RetryPolicy::default(), request()).await;

        assert_eq!(
            outcome.into_result(),
            Err(CoreError::UpstreamError {
                status: 500,
                body: "overloaded".to_string(),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_received_response_wins_over_later_network_errors() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let mut transport = MockUpstreamTransport::new();
        transport.expect_post_json().times(3).returning(move |_| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Box::pin(async move {
                if attempt == 1 {
                    Ok(UpstreamResponse::new(429, "slow down"))
                } else {
                    Err(TransportError::new("connection reset"))
                }
            })
        });

        let outcome = call_with_retry(&transport, &RetryPolicy::default(), request()).await;

        assert_eq!(
            outcome,
            CallOutcome::ErrorResponse {
                response: UpstreamResponse::new(429, "slow down"),
                attempts: 3,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy_does_not_wait() {
        let policy = RetryPolicy {
            max_attempts: 1,
            base_delay: Duration::from_secs(30),
            ..RetryPolicy::default()
        };
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_| Box::pin(async { Err(TransportError::new("dns failure")) }));

        let start = tokio::time::Instant::now();
        let outcome = call_with_retry(&transport, &policy, request()).await;

        assert!(matches!(outcome, CallOutcome::Unreachable { attempts: 1, .. }));
        assert_eq!(tokio::time::Instant::now() - start, Duration::ZERO);
    }
}
