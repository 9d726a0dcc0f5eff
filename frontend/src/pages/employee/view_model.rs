use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest};
use crate::pages::employee::{repository::EmployeeRepository, utils::LeaveFormState};
use crate::state::session::{use_session, SessionState};
use leptos::*;
use log::error as log_error;

#[derive(Clone, Copy)]
pub struct EmployeeViewModel {
    pub show_form: RwSignal<bool>,
    pub form: LeaveFormState,
    pub leaves: RwSignal<Vec<LeaveRequest>>,
    pub error: RwSignal<Option<ApiError>>,
    pub fetch_action: Action<(), Result<Vec<LeaveRequest>, ApiError>>,
    pub submit_action: Action<CreateLeaveRequest, Result<LeaveRequest, ApiError>>,
}

impl EmployeeViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(EmployeeRepository::new(api));
        let (session, _) = use_session();

        let show_form = create_rw_signal(false);
        let form = LeaveFormState::default();
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

        let submit_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let token = current_token(session);
            let payload = payload.clone();
            async move {
                let token = token.ok_or_else(|| ApiError::unknown("Not signed in"))?;
                repo.submit_leave(&token, payload).await
            }
        });

        create_effect(move |_| {
            if let Some(result) = fetch_action.value().get() {
                apply_fetch_result(result, leaves, error);
            }
        });

        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                apply_submit_result(result, form, show_form, error, fetch_action);
            }
        });

        Self {
            show_form,
            form,
            leaves,
            error,
            fetch_action,
            submit_action,
        }
    }
}

impl Default for EmployeeViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn current_token(session: ReadSignal<SessionState>) -> Option<String> {
    session.get_untracked().session.map(|s| s.token)
}

/// A successful fetch replaces the list wholesale and clears the error; a
/// failed fetch only sets the error, the list keeps whatever it showed.
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

fn apply_submit_result(
    result: Result<LeaveRequest, ApiError>,
    form: LeaveFormState,
    show_form: RwSignal<bool>,
    error: RwSignal<Option<ApiError>>,
    fetch_action: Action<(), Result<Vec<LeaveRequest>, ApiError>>,
) {
    match result {
        Ok(_) => {
            form.reset();
            show_form.set(false);
            error.set(None);
            fetch_action.dispatch(());
        }
        Err(err) => error.set(Some(submit_failure(err))),
    }
}

/// Server-provided messages (including validation replies) are shown
/// verbatim; transport and parse failures collapse to a generic message.
fn submit_failure(err: ApiError) -> ApiError {
    if err.is_server_message() {
        err
    } else {
        ApiError::request_failed("Failed to create leave request")
    }
}
