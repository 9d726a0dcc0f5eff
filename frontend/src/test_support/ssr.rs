use leptos::*;

/// Runs `f` inside a fresh reactive runtime and tears the runtime down
/// afterwards, so tests never leak signals into each other.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a component tree to its HTML string with resource loading
/// suppressed. Effects do not run here, which keeps browser-only paths
/// (localStorage, redirects) out of view assertions.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
