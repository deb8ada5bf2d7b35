use mixer_core::KeyValueStore;
use web_sys as web;

/// `window.localStorage`, or nothing when the browser refuses access (private mode, iframes).
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[persist] localStorage unavailable; save/load disabled");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn put(&mut self, key: &str, value: String) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, &value) {
                log::warn!("[persist] setItem failed: {:?}", e);
            }
        }
    }
}
