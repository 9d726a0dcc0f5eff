use crate::api::{ApiError, CreateLeaveRequest, LeaveRequest};
use crate::pages::employee::utils::LeaveFormState;
use leptos::*;

#[component]
pub fn LeaveRequestForm(
    state: LeaveFormState,
    error: RwSignal<Option<ApiError>>,
    action: Action<CreateLeaveRequest, Result<LeaveRequest, ApiError>>,
) -> impl IntoView {
    let pending = action.pending();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match state.to_payload() {
            Ok(payload) => {
                error.set(None);
                action.dispatch(payload);
            }
            Err(err) => {
                error.set(Some(err));
            }
        }
    };

    let start_signal = state.start_signal();
    let end_signal = state.end_signal();
    let reason_signal = state.reason_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-gray-900">"New Leave Request"</h3>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Start Date"</label>
                        <input
                            type="date"
                            required
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_signal.get()
                            on:input=move |ev| start_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"End Date"</label>
                        <input
                            type="date"
                            required
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || end_signal.get()
                            on:input=move |ev| end_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Reason"</label>
                    <textarea
                        rows=3
                        required
                        placeholder="Please provide a reason for your leave request"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </form>
        </div>
    }
}
