use crate::api::{ApiClient, ApiError, LeaveRequest};
use crate::pages::admin::repository::AdminRepository;
use crate::state::session::{use_session, SessionState};
use leptos::*;
use log::error as log_error;

/// One admin decision on a pending request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaveDecision {
    pub id: i64,
    pub approve: bool,
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub leaves: RwSignal<Vec<LeaveRequest>>,
    pub error: RwSignal<Option<ApiError>>,
    pub fetch_action: Action<(), Result<Vec<LeaveRequest>, ApiError>>,
    pub decision_action: Action<LeaveDecision, Result<LeaveRequest, ApiError>>,
}

impl AdminViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AdminRepository::new(api));
        let (session, _) = use_session();

        let leaves = create_rw_signal(Vec::new());
        let error = create_rw_signal(None::<ApiError>);

        let fetch_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            let token = current_token(session);
            async move {
                let token = token.ok_or_else(|| ApiError::unknown("Not signed in"))?;
                repo.list_leaves(&token).await
            }
        });

        let decision_action = create_action(move |decision: &LeaveDecision| {
            let repo = repository.get_value();
            let token = current_token(session);
            let decision = decision.clone();
            async move {
                let token = token.ok_or_else(|| ApiError::unknown("Not signed in"))?;
                if decision.approve {
                    repo.approve(&token, decision.id).await
                } else {
                    repo.reject(&token, decision.id).await
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = fetch_action.value().get() {
                apply_fetch_result(result, leaves, error);
            }
        });

        create_effect(move |_| {
            if let Some(result) = decision_action.value().get() {
                apply_decision_result(result, error, fetch_action);
            }
        });

        Self {
            leaves,
            error,
            fetch_action,
            decision_action,
        }
    }
}

impl Default for AdminViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn current_token(session: ReadSignal<SessionState>) -> Option<String> {
    session.get_untracked().session.map(|s| s.token)
}

fn apply_fetch_result(
    result: Result<Vec<LeaveRequest>, ApiError>,
    leaves: RwSignal<Vec<LeaveRequest>>,
    error: RwSignal<Option<ApiError>>,
) {
    match result {
        Ok(list) => {
            leaves.set(list);
            error.set(None);
        }
        Err(err) => {
            log_error!("leave list fetch failed: {}", err);
            error.set(Some(ApiError::request_failed(
                "Failed to fetch leave requests",
            )));
        }
    }
}

/// A settled decision re-fetches the full list rather than patching the row
/// locally, so the view always reflects what the backend committed.
fn apply_decision_result(
    result: Result<LeaveRequest, ApiError>,
    error: RwSignal<Option<ApiError>>,
    fetch_action: Action<(), Result<Vec<LeaveRequest>, ApiError>>,
) {
    match result {
        Ok(_) => {
            error.set(None);
            fetch_action.dispatch(());
        }
        Err(err) => {
            log_error!("leave status update failed: {}", err);
            error.set(Some(ApiError::request_failed(
                "Failed to update leave status",
            )));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_leave;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn fetch_failure_sets_the_generic_message() {
        with_runtime(|| {
            let leaves = create_rw_signal(vec![sample_leave(1, "pending")]);
            let error = create_rw_signal(None::<ApiError>);

            apply_fetch_result(Err(ApiError::unknown("boom")), leaves, error);

            assert_eq!(leaves.get_untracked().len(), 1);
            assert_eq!(
                error.get_untracked().unwrap().error,
                "Failed to fetch leave requests"
            );
        });
    }

    // Dispatching an action off-browser goes through tokio's spawn_local,
    // which needs a LocalSet on the current thread.
    #[tokio::test]
    async fn decision_success_clears_the_error_and_refetches() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                with_runtime(|| {
                    let error = create_rw_signal(Some(ApiError::request_failed("stale")));
                    let fetches = create_rw_signal(0);
                    let fetch_action = create_action(move |_: &()| {
                        fetches.update(|count| *count += 1);
                        async move { Ok(Vec::new()) }
                    });

                    apply_decision_result(Ok(sample_leave(7, "approved")), error, fetch_action);

                    assert!(error.get_untracked().is_none());
                    assert_eq!(fetches.get_untracked(), 1);
                });
            })
            .await;
    }

    #[test]
    fn decision_failure_reports_without_touching_the_list() {
        with_runtime(|| {
            let error = create_rw_signal(None::<ApiError>);
            let fetch_action =
                create_action(|_: &()| async { Ok(Vec::<LeaveRequest>::new()) });

            apply_decision_result(
                Err(ApiError::request_failed("connection refused")),
                error,
                fetch_action,
            );

            assert_eq!(
                error.get_untracked().unwrap().error,
                "Failed to update leave status"
            );
        });
    }
}
