//! Timeout policy for document store calls.

use std::future::Future;
use std::time::Duration;

use rb_core::ports::DocumentStoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
    #[error("{operation} timed out after {limit:?}")]
    TimedOut {
        operation: &'static str,
        limit: Duration,
    },
}

/// Run a document store call, giving up after `limit`.
pub(crate) async fn call_with_timeout<T, F>(
    operation: &'static str,
    limit: Duration,
    call: F,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, DocumentStoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => Ok(result?),
        Err(_elapsed) => Err(GatewayError::TimedOut { operation, limit }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn slow_call_times_out() {
        let result: Result<(), GatewayError> =
            call_with_timeout("recipe save", Duration::from_millis(50), async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            err,
            GatewayError::TimedOut {
                operation: "recipe save",
                limit: Duration::from_millis(50)
            }
        );
        assert_eq!(err.to_string(), "recipe save timed out after 50ms");
    }

    #[tokio::test]
    async fn store_errors_pass_through() {
        let result: Result<(), GatewayError> =
            call_with_timeout("recipe save", Duration::from_secs(1), async {
                Err(DocumentStoreError::Backend("quota exceeded".into()))
            })
            .await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "backend error: quota exceeded"
        );
    }
}
