use std::collections::VecDeque;

use crate::{Settings, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings().await
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings.normalized()).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct MockRepository {
        settings: RefCell<Option<Settings>>,
    }

    impl SettingsRepository for MockRepository {
        async fn read_settings(&self) -> Result<Settings, String> {
            Ok(self.settings.borrow().clone().unwrap_or_default())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), String> {
            *self.settings.borrow_mut() = Some(settings);
            Ok(())
        }
    }

    #[test]
    fn test_get_settings_default() {
        let service = Service::new(MockRepository::default());

        assert_eq!(block_on(service.get_settings()).unwrap(), Settings::default());
    }

    #[test]
    fn test_set_settings_normalized() {
        let service = Service::new(MockRepository::default());

        block_on(service.set_settings(Settings {
            base_url: "http://localhost:8080/".into(),
            api_host: String::new(),
            api_key: " abc ".into(),
        }))
        .unwrap();

        assert_eq!(
            block_on(service.get_settings()).unwrap(),
            Settings {
                base_url: "http://localhost:8080".into(),
                api_key: "abc".into(),
                ..Settings::default()
            }
        );
    }
}
