use crate::state::session;
use leptos::*;

/// Dashboard header: page title on the left, the logout control on the
/// right. Logout wipes the persisted session and returns to the login view.
#[component]
pub fn Header(#[prop(into)] title: Signal<String>) -> impl IntoView {
    let (_session, set_session) = session::use_session();
    let on_logout = move |_| {
        session::logout(set_session);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900">
                        {move || title.get()}
                    </h1>
                    <button
                        on:click=on_logout
                        class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
