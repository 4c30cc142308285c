use std::collections::VecDeque;

use fitscout_web_app::{Settings, SettingsRepository, log};
use gloo_storage::Storage as GlooStorage;

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";
const LOG_CAPACITY: usize = 100;

pub struct LocalStorage;

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(Settings::default()),
                err => Err(err),
            },
        }
        .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(LOG_CAPACITY);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use fitscout_web_app::log::{Entry, Repository};
        use ::log::Level;
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::super::*;

        #[wasm_bindgen_test]
        async fn test_settings() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(LocalStorage.read_settings().await.unwrap(), Settings::default());

            let settings = Settings {
                base_url: "http://localhost:8080".into(),
                api_host: "localhost".into(),
                api_key: "secret".into(),
            };
            LocalStorage.write_settings(settings.clone()).await.unwrap();

            assert_eq!(LocalStorage.read_settings().await.unwrap(), settings);
        }

        #[wasm_bindgen_test]
        fn test_log_entries() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(LocalStorage.read_entries().unwrap(), VecDeque::new());

            for i in 0..=LOG_CAPACITY {
                LocalStorage
                    .write_entry(Entry {
                        time: String::new(),
                        level: Level::Error,
                        message: i.to_string(),
                    })
                    .unwrap();
            }

            let entries = LocalStorage.read_entries().unwrap();
            assert_eq!(entries.len(), LOG_CAPACITY);
            assert_eq!(entries[0].message, LOG_CAPACITY.to_string());
            assert_eq!(entries[LOG_CAPACITY - 1].message, "1");
        }
    }
}
