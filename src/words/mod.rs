mod dictionary;

pub use dictionary::{Dictionary, DictionaryApi};

use rand::prelude::IndexedRandom;
use thiserror::Error;

use crate::wordle::WORD_LEN;

pub const WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/stuartpb/wordles/main/wordles.json";
pub const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Error)]
pub enum WordsError {
    #[error("failed to fetch the word list: {0}")]
    Retrieval(#[from] reqwest::Error),
    #[error("word list request returned status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("failed to parse the word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word list contained no playable words")]
    EmptyWordList,
    #[error("target word must be exactly five letters, got {0:?}")]
    InvalidTarget(String),
}

/// Supplies the hidden answer for a session: either picked uniformly at
/// random from a remote JSON word list, or fixed up front. One attempt per
/// session start, no retry; a session must not start without a target.
#[derive(Clone)]
pub enum WordSource {
    Remote { client: reqwest::Client, url: String },
    Fixed(String),
}

impl WordSource {
    pub fn remote(url: impl Into<String>) -> Self {
        WordSource::Remote {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn fixed(word: &str) -> Result<Self, WordsError> {
        Ok(WordSource::Fixed(normalize_target(word)?))
    }

    pub async fn select_target(&self) -> Result<String, WordsError> {
        match self {
            WordSource::Fixed(word) => Ok(word.clone()),
            WordSource::Remote { client, url } => {
                let response = client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(WordsError::BadStatus(response.status()));
                }
                let body = response.text().await?;
                let words = parse_word_list(&body)?;
                tracing::info!(candidates = words.len(), "fetched word list");
                words
                    .choose(&mut rand::rng())
                    .cloned()
                    .ok_or(WordsError::EmptyWordList)
            }
        }
    }
}

/// Parse a JSON array of candidate words, keeping only playable ones.
pub fn parse_word_list(body: &str) -> Result<Vec<String>, WordsError> {
    let words: Vec<String> = serde_json::from_str(body)?;
    let words: Vec<String> = words
        .iter()
        .filter_map(|word| normalize_target(word).ok())
        .collect();
    if words.is_empty() {
        return Err(WordsError::EmptyWordList);
    }
    Ok(words)
}

fn normalize_target(word: &str) -> Result<String, WordsError> {
    let normalized = word.to_ascii_lowercase();
    if normalized.len() == WORD_LEN && normalized.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(normalized)
    } else {
        Err(WordsError::InvalidTarget(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_word_list() {
        let words = parse_word_list(r#"["happy", "apple", "crane"]"#).unwrap();
        assert_eq!(words, vec!["happy", "apple", "crane"]);
    }

    #[test]
    fn filters_unplayable_entries() {
        let words = parse_word_list(r#"["happy", "ab", "sixsix", "APPLE", "émigré"]"#).unwrap();
        assert_eq!(words, vec!["happy", "apple"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_word_list("not json"),
            Err(WordsError::Parse(_))
        ));
    }

    #[test]
    fn rejects_a_list_without_playable_words() {
        assert!(matches!(
            parse_word_list(r#"["ab", "x"]"#),
            Err(WordsError::EmptyWordList)
        ));
    }

    #[tokio::test]
    async fn fixed_source_returns_the_configured_word() {
        let source = WordSource::fixed("Happy").unwrap();
        assert_eq!(source.select_target().await.unwrap(), "happy");
        // And again: selection is stable for a fixed source
        assert_eq!(source.select_target().await.unwrap(), "happy");
    }

    #[test]
    fn fixed_source_rejects_bad_words() {
        assert!(matches!(
            WordSource::fixed("four"),
            Err(WordsError::InvalidTarget(_))
        ));
        assert!(matches!(
            WordSource::fixed("h4ppy"),
            Err(WordsError::InvalidTarget(_))
        ));
    }
}
