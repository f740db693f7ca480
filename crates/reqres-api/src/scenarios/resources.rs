//! Resource scenarios: list ordering, read and not-found.

use crate::assertions::{assert_equals, assert_ids_non_decreasing};
use crate::client::ReqresClient;
use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::spec::ResponseSpec;

use super::{KNOWN_ID, KNOWN_RESOURCE_COLOR, MISSING_ID};

/// `GET /api/unknown`: 200, ids never decrease.
pub async fn list_resources<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let page = client.list_resources().await?;
    assert_ids_non_decreasing(&page.data)
}

/// `GET /api/unknown/2`: 200, colour is `#C74375`.
pub async fn single_resource<B: HttpBackend>(mut client: ReqresClient<B>) -> ApiResult<()> {
    client.expect(ResponseSpec::ok());

    let resource = client.require_resource(KNOWN_ID).await?;

    assert_equals(
        "color",
        &Some(KNOWN_RESOURCE_COLOR),
        &resource.color.as_deref(),
    )
}

/// `GET /api/unknown/23`: 404 and no `data`.
pub async fn single_resource_not_found<B: HttpBackend>(
    mut client: ReqresClient<B>,
) -> ApiResult<()> {
    client.expect(ResponseSpec::not_found());

    match client.get_resource(MISSING_ID).await? {
        None => Ok(()),
        Some(resource) => Err(ApiError::assertion(
            format!("data for resource {MISSING_ID}"),
            "absent",
            format!("{resource:?}"),
        )),
    }
}
