use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserProfile},
    utils::storage,
};
use leptos::*;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Proof of authentication plus the cached profile. Token and user are
/// persisted and removed together; a half-written pair counts as no session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

pub fn parse_stored_profile(raw: &str) -> Option<UserProfile> {
    serde_json::from_str(raw).ok()
}

/// Reads the persisted session. Missing keys or an unparsable profile are
/// treated as "not signed in"; no token freshness check happens here.
pub fn load() -> Option<Session> {
    let storage = storage::local_storage().ok()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
    let user = parse_stored_profile(&raw_user)?;
    Some(Session { token, user })
}

pub fn save(session: &Session) -> Result<(), String> {
    let storage = storage::local_storage()?;
    let raw_user = serde_json::to_string(&session.user)
        .map_err(|e| format!("Failed to serialize profile: {}", e))?;
    storage
        .set_item(TOKEN_KEY, &session.token)
        .map_err(|_| "Failed to persist token".to_string())?;
    storage
        .set_item(USER_KEY, &raw_user)
        .map_err(|_| "Failed to persist profile".to_string())?;
    Ok(())
}

pub fn clear() {
    if let Ok(storage) = storage::local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (state, set_state) = create_signal(SessionState {
        session: None,
        loading: true,
    });
    provide_context::<SessionContext>((state, set_state));

    // localStorage only exists in the browser; restore in a client-side effect.
    create_effect(move |_| {
        let restored = load();
        set_state.update(|state| {
            state.session = restored;
            state.loading = false;
        });
    });

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Persists the session and publishes it to the context in one step, so
/// storage and view state cannot drift apart.
pub fn establish(set_state: WriteSignal<SessionState>, session: Session) {
    let _ = save(&session);
    set_state.update(|state| {
        state.session = Some(session);
        state.loading = false;
    });
}

pub fn logout(set_state: WriteSignal<SessionState>) {
    clear();
    set_state.update(|state| {
        state.session = None;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_state, set_state) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move {
            let response = api.login(payload).await?;
            establish(
                set_state,
                Session {
                    token: response.token,
                    user: response.user,
                },
            );
            Ok(())
        }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_session();
            let snapshot = state.get();
            assert!(snapshot.session.is_none());
            assert!(!snapshot.loading);
        });
    }
}
