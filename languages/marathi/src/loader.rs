use boli_types::Language;

pub struct MarathiLoader;

impl MarathiLoader {
    /// Load the phrase tables compiled into the binary
    pub fn load_embedded() -> Result<Language, serde_json::Error> {
        let json = include_str!("../data/marathi.json");
        tracing::info!("Loading embedded Marathi phrase tables...");
        let language: Language = serde_json::from_str(json)?;
        tracing::info!(
            "Loaded {} categories and {} dictionary entries",
            language.categories.len(),
            language.dictionary.len()
        );
        Ok(language)
    }
}
