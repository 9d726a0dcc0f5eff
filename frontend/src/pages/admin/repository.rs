use crate::api::{ApiClient, ApiError, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_leaves(&self, token: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leaves(token).await
    }

    pub async fn approve(&self, token: &str, id: i64) -> Result<LeaveRequest, ApiError> {
        self.client.update_leave_status(token, id, "approved").await
    }

    pub async fn reject(&self, token: &str, id: i64) -> Result<LeaveRequest, ApiError> {
        self.client.update_leave_status(token, id, "rejected").await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn leave_json(id: i64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": 1,
            "employee_name": "Dana Field",
            "start_date": "2024-01-01",
            "end_date": "2024-01-05",
            "reason": "Vacation",
            "status": status,
            "created_at": "2024-01-01T08:30:00"
        })
    }

    #[tokio::test]
    async fn approve_patches_the_target_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/leaves/7/status")
                .json_body(json!({"status": "approved"}));
            then.status(200).json_body(leave_json(7, "approved"));
        });

        let repo = AdminRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let updated = repo.approve("tok-1", 7).await.unwrap();

        mock.assert();
        assert_eq!(updated.status, "approved");
    }

    #[tokio::test]
    async fn reject_patches_the_target_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/leaves/9/status")
                .json_body(json!({"status": "rejected"}));
            then.status(200).json_body(leave_json(9, "rejected"));
        });

        let repo = AdminRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let updated = repo.reject("tok-1", 9).await.unwrap();

        mock.assert();
        assert_eq!(updated.status, "rejected");
    }
}
