use boli_types::Language;

pub struct GujaratiLoader;

impl GujaratiLoader {
    pub fn load_embedded() -> Result<Language, serde_json::Error> {
        let json = include_str!("../data/gujarati.json");
        tracing::info!("Loading embedded Gujarati phrase tables...");
        let language: Language = serde_json::from_str(json)?;
        tracing::info!(
            "Loaded {} categories and {} dictionary entries",
            language.categories.len(),
            language.dictionary.len()
        );
        Ok(language)
    }
}
