//! Session storage backed by the browser's `window.sessionStorage`

use querydash_core::SessionStore;

/// Reads from `window.sessionStorage`.
///
/// Outside a browser, or when storage access is denied, every key is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    #[cfg(target_arch = "wasm32")]
    fn get_value(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.session_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_value(&self, _key: &str) -> Option<String> {
        None
    }
}
