use crate::api::LeaveRequest;
use crate::components::{empty_state::EmptyState, status::status_class};
use crate::utils::time::format_request_date;
use leptos::*;

#[component]
pub fn LeaveList(#[prop(into)] leaves: Signal<Vec<LeaveRequest>>) -> impl IntoView {
    view! {
        <Show
            when=move || !leaves.get().is_empty()
            fallback=|| view! { <EmptyState title="No leave requests found." /> }
        >
            <div class="space-y-4">
                {move || {
                    leaves
                        .get()
                        .iter()
                        .map(|leave| view! { <LeaveCard leave=leave.clone()/> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
fn LeaveCard(leave: LeaveRequest) -> impl IntoView {
    let badge = status_class(&leave.status);
    view! {
        <div class="bg-white shadow rounded-lg p-4">
            <div class="space-y-1 text-sm text-gray-700">
                <p>
                    <strong>"Dates: "</strong>
                    {leave.start_date.to_string()} " to " {leave.end_date.to_string()}
                </p>
                <p><strong>"Reason: "</strong>{leave.reason.clone()}</p>
                <p>
                    <strong>"Status: "</strong>
                    <span class=badge>{leave.status.clone()}</span>
                </p>
                <p><strong>"Requested: "</strong>{format_request_date(&leave.created_at)}</p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_leave;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_list_shows_the_empty_state() {
        let html = render_to_string(|| {
            let leaves = create_rw_signal(Vec::new());
            view! { <LeaveList leaves=leaves/> }
        });
        assert!(html.contains("No leave requests found."));
    }

    #[test]
    fn cards_render_dates_reason_and_status_class() {
        let html = render_to_string(|| {
            let leaves = create_rw_signal(vec![sample_leave(1, "approved")]);
            view! { <LeaveList leaves=leaves/> }
        });
        assert!(html.contains("2024-01-01"));
        assert!(html.contains("Vacation"));
        assert!(html.contains("status-approved"));
    }

    #[test]
    fn unknown_status_falls_back_to_pending_class() {
        let html = render_to_string(|| {
            let leaves = create_rw_signal(vec![sample_leave(1, "escalated")]);
            view! { <LeaveList leaves=leaves/> }
        });
        assert!(html.contains("status-pending"));
    }
}
