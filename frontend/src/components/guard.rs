use crate::{components::layout::LoadingSpinner, state::session::use_session};
use leptos::*;

/// Wraps the auth views. Anyone who already holds a session is sent back to
/// the dashboard shell at `/` instead of seeing login or register again.
#[component]
pub fn RequireGuest(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let has_session = create_memo(move |_| session.get().session.is_some());
    let is_loading = create_memo(move |_| session.get().loading);
    create_effect(move |_| {
        let state = session.get();
        if state.loading || state.session.is_none() {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/");
        }
    });
    view! {
        <Show
            when=move || should_render_guest_children(has_session.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_guest_children(has_session: bool, is_loading: bool) -> bool {
    !has_session && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireGuest;
    use crate::test_support::helpers::{employee_profile, provide_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_guest_renders_children_when_signed_out() {
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RequireGuest>
                    {|| view! { <div>"guest-content"</div> }}
                </RequireGuest>
            }
        });
        assert!(html.contains("guest-content"));
    }

    #[test]
    fn require_guest_hides_children_when_signed_in() {
        let html = render_to_string(move || {
            provide_session(Some(employee_profile()));
            view! {
                <RequireGuest>
                    {|| view! { <div>"guest-content"</div> }}
                </RequireGuest>
            }
        });
        assert!(!html.contains("guest-content"));
    }
}
