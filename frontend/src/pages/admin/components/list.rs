use crate::api::LeaveRequest;
use crate::components::{empty_state::EmptyState, status::status_class};
use crate::pages::admin::view_model::LeaveDecision;
use crate::utils::time::format_request_date;
use leptos::*;

#[component]
pub fn AdminLeaveList(
    #[prop(into)] leaves: Signal<Vec<LeaveRequest>>,
    #[prop(into)] pending: Signal<bool>,
    on_decision: Callback<LeaveDecision>,
) -> impl IntoView {
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
                        .map(|leave| {
                            view! {
                                <AdminLeaveCard
                                    leave=leave.clone()
                                    pending=pending
                                    on_decision=on_decision
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
fn AdminLeaveCard(
    leave: LeaveRequest,
    #[prop(into)] pending: Signal<bool>,
    on_decision: Callback<LeaveDecision>,
) -> impl IntoView {
    let badge = status_class(&leave.status);
    let id = leave.id;
    // Approve/Reject only exist while the request is still pending; every
    // other status renders read-only.
    let actionable = leave.is_pending();
    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <div class="space-y-1 text-sm text-gray-700">
                <p><strong>"Employee: "</strong>{leave.employee_name.clone()}</p>
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
            <Show when=move || actionable>
                <div class="flex gap-2">
                    <button
                        class="px-3 py-1 rounded bg-green-600 text-white hover:bg-green-700 disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| on_decision.call(LeaveDecision { id, approve: true })
                    >
                        "Approve"
                    </button>
                    <button
                        class="px-3 py-1 rounded bg-red-600 text-white hover:bg-red-700 disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=move |_| on_decision.call(LeaveDecision { id, approve: false })
                    >
                        "Reject"
                    </button>
                </div>
            </Show>
        </div>
    }
}
