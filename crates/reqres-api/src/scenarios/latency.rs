//! Response-time scenario.

use crate::assertions::assert_all_emails_contain;
use crate::client::ReqresClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::spec::ResponseSpec;

use super::{DELAY_SECS, EMAIL_DOMAIN, LATENCY_LIMIT};

/// `GET /api/users?delay=3`: answered within 4000 ms, every email on the
/// reqres domain. The status code is not checked.
pub async fn delayed_response<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::any().with_max_elapsed(LATENCY_LIMIT));

    let (page, _) = client.list_users_delayed(DELAY_SECS).await?;
    assert_all_emails_contain(&page.data, EMAIL_DOMAIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::scenarios::fixtures::{fake_client, page_of, user_json};
    use reqwest::Method;
    use std::time::Duration;

    fn delayed_page(elapsed_ms: u64) -> FakeBackend {
        FakeBackend::new().with_response(
            Method::GET,
            "/api/users?delay=3",
            CannedResponse::json(
                200,
                page_of(vec![user_json(1, "george.bluth@reqres.in", "George")]),
            )
            .taking(Duration::from_millis(elapsed_ms)),
        )
    }

    #[tokio::test]
    async fn test_delayed_response_within_limit() {
        delayed_response(fake_client(delayed_page(3050)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delayed_response_too_slow() {
        let err = delayed_response(fake_client(delayed_page(4200)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::TooSlow {
                elapsed_ms: 4200,
                limit_ms: 4000,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_delayed_response_ignores_status() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/users?delay=3",
            CannedResponse::json(
                203,
                page_of(vec![user_json(2, "janet.weaver@reqres.in", "Janet")]),
            ),
        );

        delayed_response(fake_client(backend)).await.unwrap();
    }

    #[tokio::test]
    async fn test_delayed_response_fails_on_foreign_email() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/users?delay=3",
            CannedResponse::json(
                200,
                page_of(vec![
                    user_json(1, "george.bluth@reqres.in", "George"),
                    user_json(3, "emma@example.org", "Emma"),
                ]),
            )
            .taking(Duration::from_millis(120)),
        );

        let err = delayed_response(fake_client(backend)).await.unwrap_err();
        assert!(matches!(err, ApiError::AssertionFailed { .. }));
        assert!(err.to_string().contains("emma@example.org"));
    }
}
