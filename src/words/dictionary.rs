use std::future::Future;

/// Looks up whether a candidate guess is a recognized word.
///
/// Lookups must be side-effect free: asking about the same word twice with
/// no network change yields the same answer.
pub trait Dictionary {
    fn is_valid_word(&self, word: &str) -> impl Future<Output = bool> + Send;
}

/// Dictionary backed by an HTTP lookup service. A 2xx response for the word
/// means "valid"; any other status or a network error means "invalid".
/// Failing closed keeps an unreachable dictionary from letting unchecked
/// guesses through or crashing the session.
#[derive(Clone)]
pub struct DictionaryApi {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        DictionaryApi {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Dictionary for DictionaryApi {
    async fn is_valid_word(&self, word: &str) -> bool {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), word);
        match self.client.get(&url).send().await {
            Ok(response) => {
                let valid = response.status().is_success();
                tracing::debug!(word, valid, "dictionary lookup");
                valid
            }
            Err(err) => {
                tracing::debug!(word, %err, "dictionary unreachable, treating word as invalid");
                false
            }
        }
    }
}
