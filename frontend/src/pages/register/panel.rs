use crate::{
    api::{ApiClient, ApiError, RegisterRequest, RegisterResponse},
    components::{error::InlineErrorMessage, guard::RequireGuest, layout::SuccessMessage},
    pages::register::utils,
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <RequireGuest>
            {|| view! { <RegisterPanel/> }}
        </RequireGuest>
    }
}

/// Registration does not sign the new account in; on success the server's
/// confirmation is shown with a link back to the login view.
#[component]
fn RegisterPanel() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<ApiError>);
    let (confirmation, set_confirmation) = create_signal(None::<String>);

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let register_action = create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { api.register(payload).await }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(RegisterResponse { message, .. }) => {
                    set_error.set(None);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_confirmation.set(Some(message));
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
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(err) = utils::validate_registration(&name_value, &email_value, &password_value) {
            set_error.set(Some(err));
            return;
        }
        set_error.set(None);
        set_confirmation.set(None);

        register_action.dispatch(RegisterRequest {
            name: name_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Create your LeaveDesk account"
                    </h2>
                </div>
                <Show when=move || confirmation.get().is_some()>
                    <SuccessMessage message={confirmation.get().unwrap_or_default()} />
                    <p class="text-center text-sm text-gray-600">
                        <a href="/login" class="font-medium text-blue-600 hover:text-blue-500">
                            "Continue to sign in"
                        </a>
                    </p>
                </Show>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="name" class="sr-only">"Name"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                                placeholder="Name"
                                prop:value=name
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    set_name.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="email" class="sr-only">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
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
                            {move || if pending.get() { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-center text-sm text-gray-600">
                        "Already have an account? "
                        <a href="/login" class="font-medium text-blue-600 hover:text-blue-500">
                            "Sign in"
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
    fn register_page_renders_the_form_for_guests() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <RegisterPage/> }
        });
        assert!(html.contains("Create your LeaveDesk account"));
        assert!(html.contains("/login"));
    }
}
