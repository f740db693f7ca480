//! User scenarios: list, read, create, update and delete.

use crate::assertions::{Clock, assert_all_emails_contain, assert_equals, assert_timestamp_is_today};
use crate::client::ReqresClient;
use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::models::{NewUser, UserUpdate};
use crate::spec::ResponseSpec;

use super::{
    EMAIL_DOMAIN, KNOWN_ID, KNOWN_USER_FIRST_NAME, MISSING_ID, NEW_USER_JOB, NEW_USER_NAME,
    UPDATED_USER_JOB, USERS_PAGE,
};

/// `GET /api/users?page=2` without an API key: 200, every email on the
/// reqres domain.
pub async fn list_users<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    let request = client.request_spec().clone().without_api_key();
    client.install(request, ResponseSpec::ok());

    let page = client.list_users(Some(USERS_PAGE)).await?;
    assert_all_emails_contain(&page.data, EMAIL_DOMAIN)
}

/// `GET /api/users/2`: 200, first name is Janet.
pub async fn single_user<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let user = client.require_user(KNOWN_ID).await?;

    assert_equals(
        "first_name",
        &Some(KNOWN_USER_FIRST_NAME),
        &user.first_name.as_deref(),
    )
}

/// `GET /api/users/23`: 404 and no `data`.
pub async fn single_user_not_found<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::not_found());

    match client.get_user(MISSING_ID).await? {
        None => Ok(()),
        Some(user) => Err(ApiError::assertion(
            format!("data for user {MISSING_ID}"),
            "absent",
            format!("{user:?}"),
        )),
    }
}

/// `POST /api/users`: 201, `createdAt` is today.
pub async fn create_user<B: HttpBackend>(
    mut client: ReqresClient<B>,
    clock: &dyn Clock,
) -> ApiResult<()> {
    client.expect(ResponseSpec::created());

    let created = client
        .create_user(&NewUser::new(NEW_USER_NAME, NEW_USER_JOB))
        .await?;
    assert_timestamp_is_today(&created.created_at, clock)
}

/// `PUT /api/users/2`: 200, `updatedAt` is today.
pub async fn update_user_put<B: HttpBackend>(
    mut client: ReqresClient<B>,
    clock: &dyn Clock,
) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let updated = client
        .update_user(KNOWN_ID, &UserUpdate::new(NEW_USER_NAME, UPDATED_USER_JOB))
        .await?;
    assert_timestamp_is_today(&updated.updated_at, clock)
}

/// `PATCH /api/users/2`: 200, `updatedAt` is today.
pub async fn update_user_patch<B: HttpBackend>(
    mut client: ReqresClient<B>,
    clock: &dyn Clock,
) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let updated = client
        .patch_user(KNOWN_ID, &UserUpdate::new(NEW_USER_NAME, UPDATED_USER_JOB))
        .await?;
    assert_timestamp_is_today(&updated.updated_at, clock)
}

/// `DELETE /api/users/2`: 204.
pub async fn delete_user<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::no_content());
    client.delete_user(KNOWN_ID).await.map(drop)
}
