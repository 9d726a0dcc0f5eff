use crate::{
    components::{error::InlineErrorMessage, layout::Header},
    pages::admin::{
        components::list::AdminLeaveList,
        view_model::{AdminViewModel, LeaveDecision},
    },
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = AdminViewModel::new();
    let (session, _) = use_session();
    let title = Signal::derive(move || {
        session
            .get()
            .session
            .map(|s| format!("Admin Dashboard - {}", s.user.name))
            .unwrap_or_else(|| "Admin Dashboard".to_string())
    });

    // Initial list load, browser only.
    create_effect(move |_| {
        vm.fetch_action.dispatch(());
    });

    let decision_action = vm.decision_action;
    let on_decision = Callback::new(move |decision: LeaveDecision| {
        if decision_action.pending().get_untracked() {
            return;
        }
        decision_action.dispatch(decision);
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header title=title/>
            <main class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                <InlineErrorMessage error=vm.error />

                <section class="space-y-4">
                    <h3 class="text-lg font-medium text-gray-900">"All Leave Requests"</h3>
                    <AdminLeaveList
                        leaves=vm.leaves
                        pending=decision_action.pending()
                        on_decision=on_decision
                    />
                </section>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_profile, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_panel_shows_heading_and_list_section() {
        let html = render_to_string(move || {
            provide_session(Some(admin_profile()));
            view! { <AdminPanel/> }
        });
        assert!(html.contains("Admin Dashboard - Avery Chen"));
        assert!(html.contains("All Leave Requests"));
        assert!(html.contains("No leave requests found."));
    }
}
