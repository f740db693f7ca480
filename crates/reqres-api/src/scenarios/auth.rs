//! Registration and login scenarios.

use crate::assertions::assert_equals;
use crate::client::{AuthOutcome, ReqresClient};
use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::models::{Credentials, RegisterFailure};
use crate::spec::ResponseSpec;

use super::{
    LOGIN_PASSWORD, LOGIN_TOKEN, MISSING_PASSWORD_ERROR, REGISTER_PASSWORD, REGISTERED_EMAIL,
    REGISTERED_ID, UNREGISTERED_EMAIL,
};

fn expect_rejection<T: std::fmt::Debug>(outcome: AuthOutcome<T>) -> ApiResult<RegisterFailure> {
    match outcome {
        AuthOutcome::Rejected(failure) => Ok(failure),
        AuthOutcome::Accepted(body) => Err(ApiError::assertion(
            "auth outcome",
            "an error body",
            format!("{body:?}"),
        )),
    }
}

fn expect_acceptance<T>(outcome: AuthOutcome<T>) -> ApiResult<T> {
    match outcome {
        AuthOutcome::Accepted(body) => Ok(body),
        AuthOutcome::Rejected(failure) => Err(ApiError::assertion(
            "auth outcome",
            "a success body",
            failure.error,
        )),
    }
}

/// `POST /api/register` with a known email and password: 200, id is 4.
pub async fn register_successful<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let outcome = client
        .register(&Credentials::new(REGISTERED_EMAIL, REGISTER_PASSWORD))
        .await?;
    let success = expect_acceptance(outcome)?;

    assert_equals("id", &Some(REGISTERED_ID), &success.id.as_deref())
}

/// `POST /api/register` with an empty password: 400, "Missing password".
pub async fn register_unsuccessful<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::bad_request());

    let outcome = client
        .register(&Credentials::new(REGISTERED_EMAIL, ""))
        .await?;
    let failure = expect_rejection(outcome)?;

    assert_equals("error", MISSING_PASSWORD_ERROR, failure.error.as_str())
}

/// `POST /api/login` with valid credentials: 200, the documented token.
pub async fn login_successful<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let outcome = client
        .login(&Credentials::new(REGISTERED_EMAIL, LOGIN_PASSWORD))
        .await?;
    let success = expect_acceptance(outcome)?;

    assert_equals("token", LOGIN_TOKEN, success.token.as_str())
}

/// `POST /api/login` with only an email: 400, "Missing password".
pub async fn login_unsuccessful<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::bad_request());

    let outcome = client
        .login(&Credentials::email_only(UNREGISTERED_EMAIL))
        .await?;
    let failure = expect_rejection(outcome)?;

    assert_equals("error", MISSING_PASSWORD_ERROR, failure.error.as_str())
}
