#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

pub const DEFAULT_BASE_URL: &str = "https://exercisedb.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "exercisedb.p.rapidapi.com";

/// Connection settings for the exercise database.
///
/// The default API key is taken from `FITSCOUT_API_KEY` at build time.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub api_host: String,
    pub api_key: String,
}

impl Settings {
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Trim all values and fall back to the defaults for empty URL and host.
    #[must_use]
    pub fn normalized(self) -> Self {
        let default = Self::default();
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        let api_host = self.api_host.trim().to_string();
        Self {
            base_url: if base_url.is_empty() {
                default.base_url
            } else {
                base_url
            },
            api_host: if api_host.is_empty() {
                default.api_host
            } else {
                api_host
            },
            api_key: self.api_key.trim().to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: option_env!("FITSCOUT_API_KEY")
                .unwrap_or_default()
                .to_string(),
        }
    }
}
