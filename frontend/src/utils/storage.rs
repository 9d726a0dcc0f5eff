use web_sys::{Storage, Window};

/// The browser window. Absent off-browser, so callers treat the error as
/// "no persisted state" rather than a failure.
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "Browser window is not available".to_string())
}

/// `localStorage` handle backing the persisted session.
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "localStorage is not accessible".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())
}
