use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub api_keys: ApiKeySettings,
    pub scraper: ScraperSettings,
    pub results: ResultsSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct ApiKeySettings {
    pub openai: String,
}

#[derive(Deserialize, Clone)]
pub struct ScraperSettings {
    pub webdriver_url: String,
    /// Fixed delay after navigation for client-side rendering to settle.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub settle_delay_secs: u64,
}

#[derive(Deserialize, Clone)]
pub struct ResultsSettings {
    pub output_dir: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
