use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeRepository {
    client: Rc<ApiClient>,
}

impl EmployeeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_leaves(&self, token: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leaves(token).await
    }

    pub async fn submit_leave(
        &self,
        token: &str,
        payload: CreateLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        self.client.create_leave(token, payload).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn employee_repository_lists_and_submits() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/leaves");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/leaves");
            then.status(201).json_body(json!({
                "id": 1,
                "user_id": 1,
                "employee_name": "Dana Field",
                "start_date": "2024-01-01",
                "end_date": "2024-01-05",
                "reason": "Vacation",
                "status": "pending",
                "created_at": "2024-01-01T08:30:00"
            }));
        });

        let repo = EmployeeRepository::new(ApiClient::new_with_base_url(server.base_url()));
        assert!(repo.list_leaves("tok-1").await.unwrap().is_empty());

        let created = repo
            .submit_leave(
                "tok-1",
                CreateLeaveRequest {
                    start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                    reason: "Vacation".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(created.status, "pending");
    }
}
