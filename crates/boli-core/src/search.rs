use boli_types::{CategoryId, DictionaryEntry, PhraseCategory, PhraseEntry, SearchResult};
use indexmap::IndexMap;

/// Cap on merged search hits
pub const MAX_SEARCH_RESULTS: usize = 15;

/// Search category phrases and the dictionary, capped at [`MAX_SEARCH_RESULTS`]
pub fn search(
    query: &str,
    categories: &IndexMap<CategoryId, PhraseCategory>,
    dictionary: &[DictionaryEntry],
) -> Vec<SearchResult> {
    search_with_limit(query, categories, dictionary, MAX_SEARCH_RESULTS)
}

/// Category hits come first (table order, then list order), dictionary hits
/// after them. The cap applies to the concatenation, so a query with many
/// phrase hits can crowd out every dictionary hit.
pub fn search_with_limit(
    query: &str,
    categories: &IndexMap<CategoryId, PhraseCategory>,
    dictionary: &[DictionaryEntry],
    limit: usize,
) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let lowered = query.to_lowercase();
    let needle = lowered.as_str();

    let phrase_hits = categories.iter().flat_map(move |(category_id, category)| {
        category
            .phrases
            .iter()
            .enumerate()
            .filter(move |(_, phrase)| phrase_matches(phrase, query, needle))
            .map(move |(index, entry)| SearchResult::CategoryPhrase {
                category_id: category_id.clone(),
                index,
                entry: entry.clone(),
            })
    });

    let dictionary_hits = dictionary
        .iter()
        .enumerate()
        .filter(|(_, entry)| dictionary_matches(entry, needle))
        .map(|(index, entry)| SearchResult::Dictionary {
            index,
            entry: entry.clone(),
        });

    let results: Vec<SearchResult> = phrase_hits.chain(dictionary_hits).take(limit).collect();
    tracing::debug!("Search '{}': {} results", query, results.len());

    results
}

/// Target script is matched raw: most scripts have no case, and folding
/// would change what the user typed.
fn phrase_matches(phrase: &PhraseEntry, raw: &str, lowered: &str) -> bool {
    phrase.source_text.to_lowercase().contains(lowered)
        || phrase.romanization.to_lowercase().contains(lowered)
        || phrase.target_text.contains(raw)
}

fn dictionary_matches(entry: &DictionaryEntry, lowered: &str) -> bool {
    entry.source_text.to_lowercase().contains(lowered)
        || entry.romanization.to_lowercase().contains(lowered)
}

/// Dictionary tab listing. An empty query lists everything; there is no cap.
pub fn filter_dictionary<'a>(query: &str, dictionary: &'a [DictionaryEntry]) -> Vec<&'a DictionaryEntry> {
    if query.is_empty() {
        return dictionary.iter().collect();
    }

    let lowered = query.to_lowercase();
    dictionary
        .iter()
        .filter(|entry| dictionary_matches(entry, &lowered))
        .collect()
}

/// Other phrases of the same category, in list order, with their indices
pub fn similar_phrases(
    category: &PhraseCategory,
    index: usize,
    count: usize,
) -> Vec<(usize, &PhraseEntry)> {
    category
        .phrases
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .take(count)
        .collect()
}
