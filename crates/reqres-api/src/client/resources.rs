//! Resource endpoints: `/api/unknown` and `/api/unknown/{id}`.

use crate::error::ApiResult;
use crate::http::{ApiRequest, HttpBackend};
use crate::models::{Page, ResourceRecord};

use super::ReqresClient;

const RESOURCES_PATH: &str = "/api/unknown";

fn resource_path(id: u32) -> String {
    format!("{RESOURCES_PATH}/{id}")
}

impl<B: HttpBackend> ReqresClient<B> {
    /// `GET /api/unknown`.
    pub async fn list_resources(&self) -> ApiResult<Page<ResourceRecord>> {
        self.execute(&ApiRequest::get(RESOURCES_PATH)).await?.json()
    }

    /// `GET /api/unknown/{id}`. `None` when the response carries no `data`.
    pub async fn get_resource(&self, id: u32) -> ApiResult<Option<ResourceRecord>> {
        self.execute(&ApiRequest::get(resource_path(id)))
            .await?
            .data()
    }

    /// `GET /api/unknown/{id}`, failing with `MissingData` when no resource
    /// is returned.
    pub async fn require_resource(&self, id: u32) -> ApiResult<ResourceRecord> {
        self.execute(&ApiRequest::get(resource_path(id)))
            .await?
            .require_data()
    }
}
