use crate::{
    api::{ApiError, LoginRequest},
    components::{error::InlineErrorMessage, guard::RequireGuest},
    pages::login::utils,
    state::session,
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RequireGuest>
            {|| view! { <LoginPanel/> }}
        </RequireGuest>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<ApiError>);

    let login_action = session::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    set_error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(err) = utils::validate_credentials(&email_value, &password_value) {
            set_error.set(Some(err));
            return;
        }
        set_error.set(None);

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Sign in to LeaveDesk"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Leave request management"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                                placeholder="Email"
                                prop:value=email
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    set_email.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    set_password.set(target.value());
                                }
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div>
                        <button
                            type="submit"
                            disabled=pending
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-center text-sm text-gray-600">
                        "No account yet? "
                        <a href="/register" class="font-medium text-blue-600 hover:text-blue-500">
                            "Register"
                        </a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_renders_the_form_for_guests() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <LoginPage/> }
        });
        assert!(html.contains("Sign in to LeaveDesk"));
        assert!(html.contains("/register"));
    }
}
