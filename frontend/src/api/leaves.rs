use super::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveRequest, UpdateLeaveStatusRequest},
};

impl ApiClient {
    /// The backend scopes the result to the caller: employees get their own
    /// requests, admins get everyone's.
    pub async fn list_leaves(&self, token: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = Self::bearer_headers(token)?;
        let response = self
            .http_client()
            .get(format!("{}/leaves", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::map_json_response(response).await
    }

    pub async fn create_leave(
        &self,
        token: &str,
        request: CreateLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = Self::bearer_headers(token)?;
        let response = self
            .http_client()
            .post(format!("{}/leaves", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::map_json_response(response).await
    }

    pub async fn update_leave_status(
        &self,
        token: &str,
        id: i64,
        status: &str,
    ) -> Result<LeaveRequest, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = Self::bearer_headers(token)?;
        let response = self
            .http_client()
            .patch(format!("{}/leaves/{}/status", base_url, id))
            .headers(headers)
            .json(&UpdateLeaveStatusRequest {
                status: status.to_string(),
            })
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::map_json_response(response).await
    }
}
