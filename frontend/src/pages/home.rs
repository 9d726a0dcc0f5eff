use crate::{
    components::layout::LoadingSpinner,
    pages::{admin::AdminPanel, employee::EmployeePanel},
    state::session::use_session,
};
use leptos::*;

/// The shell route. Exactly one of the two dashboards renders, chosen by
/// the session's role; without a session the browser is sent to `/login`.
#[component]
pub fn HomePage() -> impl IntoView {
    let (session, _) = use_session();
    let is_loading = create_memo(move |_| session.get().loading);
    let role = create_memo(move |_| session.get().session.map(|s| s.user.role));

    create_effect(move |_| {
        let state = session.get();
        if state.loading || state.session.is_some() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });

    view! {
        <Show when=move || !is_loading.get() fallback=|| view! { <LoadingSpinner /> }>
            {move || match role.get().as_deref() {
                Some("admin") => view! { <AdminPanel/> }.into_view(),
                Some(_) => view! { <EmployeePanel/> }.into_view(),
                None => ().into_view(),
            }}
        </Show>
    }
}
