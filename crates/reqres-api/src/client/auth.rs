//! Registration and login: `/api/register` and `/api/login`.

use serde::de::DeserializeOwned;

use crate::error::ApiResult;
use crate::http::{ApiRequest, ApiResponse, HttpBackend};
use crate::models::{Credentials, LoginSuccess, RegisterFailure, RegisterSuccess};

use super::ReqresClient;

/// Result of a register or login call: the success body for 2xx responses,
/// the error body otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<T> {
    Accepted(T),
    Rejected(RegisterFailure),
}

impl<T> AuthOutcome<T> {
    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejected(self) -> Option<RegisterFailure> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(failure) => Some(failure),
        }
    }
}

fn decode_outcome<T: DeserializeOwned>(response: &ApiResponse) -> ApiResult<AuthOutcome<T>> {
    if (200..300).contains(&response.status()) {
        Ok(AuthOutcome::Accepted(response.json()?))
    } else {
        Ok(AuthOutcome::Rejected(response.json()?))
    }
}

impl<B: HttpBackend> ReqresClient<B> {
    /// `POST /api/register`.
    pub async fn register(
        &self,
        credentials: &Credentials,
    ) -> ApiResult<AuthOutcome<RegisterSuccess>> {
        let request = ApiRequest::post("/api/register").json(credentials)?;
        decode_outcome(&self.execute(&request).await?)
    }

    /// `POST /api/login`.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthOutcome<LoginSuccess>> {
        let request = ApiRequest::post("/api/login").json(credentials)?;
        decode_outcome(&self.execute(&request).await?)
    }
}
