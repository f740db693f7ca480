//! User endpoints: `/api/users` and `/api/users/{id}`.

use crate::error::ApiResult;
use crate::http::{ApiRequest, ApiResponse, HttpBackend};
use crate::models::{CreatedRecord, NewUser, Page, UpdatedRecord, UserRecord, UserUpdate};

use super::ReqresClient;

const USERS_PATH: &str = "/api/users";

fn user_path(id: u32) -> String {
    format!("{USERS_PATH}/{id}")
}

impl<B: HttpBackend> ReqresClient<B> {
    /// `GET /api/users?page=N`.
    pub async fn list_users(&self, page: Option<u32>) -> ApiResult<Page<UserRecord>> {
        let mut request = ApiRequest::get(USERS_PATH);
        if let Some(page) = page {
            request = request.query("page", page);
        }
        self.execute(&request).await?.json()
    }

    /// `GET /api/users?delay=N`, where the server waits `delay_secs` before
    /// answering.
    pub async fn list_users_delayed(&self, delay_secs: u32) -> ApiResult<(Page<UserRecord>, ApiResponse)> {
        let response = self
            .execute(&ApiRequest::get(USERS_PATH).query("delay", delay_secs))
            .await?;
        Ok((response.json()?, response))
    }

    /// `GET /api/users/{id}`. `None` when the response carries no `data`.
    pub async fn get_user(&self, id: u32) -> ApiResult<Option<UserRecord>> {
        self.execute(&ApiRequest::get(user_path(id))).await?.data()
    }

    /// `GET /api/users/{id}`, failing with `MissingData` when no user is
    /// returned.
    pub async fn require_user(&self, id: u32) -> ApiResult<UserRecord> {
        self.execute(&ApiRequest::get(user_path(id)))
            .await?
            .require_data()
    }

    /// `POST /api/users`.
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<CreatedRecord> {
        let request = ApiRequest::post(USERS_PATH).json(user)?;
        self.execute(&request).await?.json()
    }

    /// `PUT /api/users/{id}`.
    pub async fn update_user(&self, id: u32, update: &UserUpdate) -> ApiResult<UpdatedRecord> {
        let request = ApiRequest::put(user_path(id)).json(update)?;
        self.execute(&request).await?.json()
    }

    /// `PATCH /api/users/{id}`.
    pub async fn patch_user(&self, id: u32, update: &UserUpdate) -> ApiResult<UpdatedRecord> {
        let request = ApiRequest::patch(user_path(id)).json(update)?;
        self.execute(&request).await?.json()
    }

    /// `DELETE /api/users/{id}`. The body is not inspected.
    pub async fn delete_user(&self, id: u32) -> ApiResult<ApiResponse> {
        self.execute(&ApiRequest::delete(user_path(id))).await
    }
}
