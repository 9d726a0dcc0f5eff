use crate::{
    components::{error::InlineErrorMessage, layout::Header},
    pages::employee::{
        components::{leave_form::LeaveRequestForm, list::LeaveList},
        view_model::EmployeeViewModel,
    },
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn EmployeePanel() -> impl IntoView {
    let vm = EmployeeViewModel::new();
    let (session, _) = use_session();
    let title = Signal::derive(move || {
        session
            .get()
            .session
            .map(|s| format!("Welcome, {}", s.user.name))
            .unwrap_or_else(|| "Welcome".to_string())
    });

    // Initial list load, browser only.
    create_effect(move |_| {
        vm.fetch_action.dispatch(());
    });

    let show_form = vm.show_form;
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header title=title/>
            <main class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                <div>
                    <button
                        class="px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700"
                        on:click=move |_| show_form.update(|open| *open = !*open)
                    >
                        {move || if show_form.get() { "Cancel" } else { "Request Leave" }}
                    </button>
                </div>

                <InlineErrorMessage error=vm.error />

                <Show when=move || show_form.get()>
                    <LeaveRequestForm state=vm.form error=vm.error action=vm.submit_action/>
                </Show>

                <section class="space-y-4">
                    <h3 class="text-lg font-medium text-gray-900">"Your Leave Requests"</h3>
                    <LeaveList leaves=vm.leaves/>
                </section>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_profile, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn employee_panel_shows_greeting_and_list_section() {
        let html = render_to_string(move || {
            provide_session(Some(employee_profile()));
            view! { <EmployeePanel/> }
        });
        assert!(html.contains("Welcome, Dana Field"));
        assert!(html.contains("Your Leave Requests"));
        assert!(html.contains("Request Leave"));
        assert!(html.contains("No leave requests found."));
    }
}
