mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

#[cfg(target_arch = "wasm32")]
pub fn start() {
    use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
    use crate::state::session::SessionProvider;
    use leptos::*;
    use leptos_router::*;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting LeaveDesk frontend");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__LEAVEDESK_ENV is present (env.js), it takes precedence.
    spawn_local(async {
        config::init().await;
        log::info!("runtime config initialized");
    });

    mount_to_body(|| {
        view! {
            <SessionProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                    </Routes>
                </Router>
            </SessionProvider>
        }
    });
}
