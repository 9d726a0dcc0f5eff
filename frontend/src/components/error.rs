use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if e.code == "VALIDATION_ERROR" {
                        view! { <div class="text-xs opacity-75">{"Check the highlighted fields and try again."}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_the_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed(
                "Failed to fetch leave requests",
            )));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Failed to fetch leave requests"));
    }

    #[test]
    fn inline_error_renders_nothing_without_an_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("font-bold"));
    }

    #[test]
    fn inline_error_flags_validation_failures() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::validation("Start date is required")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Start date is required"));
        assert!(html.contains("Check the highlighted fields"));
    }
}
