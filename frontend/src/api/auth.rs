use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::map_json_response(response).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::map_json_response(response).await
    }
}
