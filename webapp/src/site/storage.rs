use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::Preferences;

// preferences live in local storage as plain strings
//
// gloo's typed get/set would json-encode the value, and the stored theme has to stay a bare
// "light" or "dark", so this goes through the raw web_sys::Storage handle instead
pub struct LocalPrefs;

impl Preferences for LocalPrefs {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn store(&self, key: &str, value: &str) {
        LocalStorage::raw()
            .set_item(key, value)
            .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
    }
}
