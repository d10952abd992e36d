use std::sync::Arc;
use std::time::Duration;

use boli_config::Config;
use boli_core::language::{BundledProvider, DataProvider};
use boli_core::speech::Speaker;
use boli_lang_gujarati::GujaratiLoader;
use boli_lang_marathi::MarathiLoader;
use boli_lessons::{FileFetcher, HttpFetcher, ResourceFetcher};
use boli_store::{JsonFileStore, KeyValueStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub provider: Arc<dyn DataProvider>,
    pub store: Arc<dyn KeyValueStore>,
    pub fetcher: Arc<dyn ResourceFetcher>,
    /// `None` when the host has no speech engine
    pub speaker: Option<Arc<dyn Speaker>>,
}

impl AppState {
    pub fn new(
        config: Config,
        provider: Arc<dyn DataProvider>,
        store: Arc<dyn KeyValueStore>,
        fetcher: Arc<dyn ResourceFetcher>,
        speaker: Option<Arc<dyn Speaker>>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            provider,
            store,
            fetcher,
            speaker,
        }
    }

    /// Wire up the bundled languages, the configured lesson source and
    /// the on-disk store
    pub fn from_config(config: Config, speaker: Option<Arc<dyn Speaker>>) -> anyhow::Result<Self> {
        let provider = Arc::new(bundled_provider(&config)?);
        let fetcher = lesson_fetcher(&config)?;

        tracing::info!("Storing user data in {}", config.storage.dir);
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(&config.storage.dir));

        Ok(Self::new(config, provider, store, fetcher, speaker))
    }
}

/// Every language compiled into the binary
pub fn bundled_provider(config: &Config) -> anyhow::Result<BundledProvider> {
    Ok(BundledProvider::new(config.default_language.as_str())
        .with_language(MarathiLoader::load_embedded()?)
        .with_language(GujaratiLoader::load_embedded()?))
}

/// Lessons come from the local asset directory when one is configured
pub fn lesson_fetcher(config: &Config) -> anyhow::Result<Arc<dyn ResourceFetcher>> {
    match &config.assets.local_dir {
        Some(dir) => {
            tracing::info!("Reading lessons from {}", dir);
            Ok(Arc::new(FileFetcher::new(dir)))
        }
        None => {
            tracing::info!("Fetching lessons from {}", config.assets.base_url);
            let timeout = Duration::from_secs(config.assets.request_timeout_secs);
            Ok(Arc::new(
                HttpFetcher::new(&config.assets.base_url)?.with_timeout(timeout)?,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use boli_lessons::FetchError;
    use boli_store::LanguagePreference;
    use boli_types::{LanguageCode, ResourceRef};

    use super::*;

    #[test]
    fn test_bundled_provider_has_both_languages() {
        let provider = bundled_provider(&Config::default()).unwrap();
        let codes: Vec<String> = provider
            .languages()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(codes, vec!["marathi", "gujarati"]);
        assert_eq!(
            provider.resolve(Some(&LanguageCode::from("hindi"))).unwrap().code.as_str(),
            "marathi"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut config = Config::default();
        config.assets.base_url = "not a url".to_string();
        assert!(lesson_fetcher(&config).is_err());
    }

    #[tokio::test]
    async fn test_local_dir_reads_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("data.json"), "[]").unwrap();

        let mut config = Config::default();
        config.assets.local_dir = Some(tmp.path().display().to_string());
        config.storage.dir = tmp.path().join("store").display().to_string();

        let state = AppState::from_config(config, None).unwrap();
        let body = state.fetcher.fetch(&ResourceRef::new("data.json")).await.unwrap();
        assert_eq!(body, "[]");
        assert!(matches!(
            state.fetcher.fetch(&ResourceRef::new("missing.json")).await,
            Err(FetchError::Io(_))
        ));
    }

    #[test]
    fn test_store_lives_in_storage_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.dir = tmp.path().join("user").display().to_string();

        let state = AppState::from_config(config, None).unwrap();
        LanguagePreference::new(state.store.clone())
            .save(&LanguageCode::from("gujarati"))
            .unwrap();

        let written =
            std::fs::read_to_string(tmp.path().join("user").join("selectedLanguage.json")).unwrap();
        assert_eq!(written, "\"gujarati\"");
    }
}
