use async_trait::async_trait;

use crate::error::Error;
use pokedex_core::pokemon::PokemonSpecies;
use pokedex_core::style::Style;

/// Client for the pokemon data upstream
///
/// Returns `Ok(None)` when the upstream reports the pokemon does not exist;
/// every other non-success outcome is an error.
#[async_trait]
pub trait InfoClient: Send + Sync {
    async fn fetch_species(&self, name: &str) -> Result<Option<PokemonSpecies>, Error>;
}

/// Raw outcome of a translation call, interpreted by the service
#[derive(Debug, Clone)]
pub struct TranslationReply {
    pub success: bool,
    pub body: String,
}

/// Client for the text-style-transformation upstream
#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(&self, text: &str, style: Style) -> Result<TranslationReply, Error>;
}

/// PokeAPI client over HTTP
pub struct PokeApiClient {
    client: reqwest::Client,
    base_uri: String,
}

impl PokeApiClient {
    pub fn new(client: reqwest::Client, base_uri: String) -> Self {
        Self {
            client,
            base_uri: base_uri.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl InfoClient for PokeApiClient {
    async fn fetch_species(&self, name: &str) -> Result<Option<PokemonSpecies>, Error> {
        let url = format!("{}/pokemon-species/{name}", self.base_uri);

        log::info!("Fetching info for pokemon: {name}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch species {name}: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            log::info!("External API returned 404 for {name}");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(Error::UpstreamStatus(response.status().as_u16()));
        }

        let species: PokemonSpecies = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse species {name}: {e}")))?;

        Ok(Some(species))
    }
}

/// FunTranslations client over HTTP
///
/// Posts form-encoded text to a path named after the style. The reply keeps
/// the raw status and body; deciding what a failure means is the service's
/// job, not this client's.
pub struct FunTranslationsClient {
    client: reqwest::Client,
    base_uri: String,
}

impl FunTranslationsClient {
    pub fn new(client: reqwest::Client, base_uri: String) -> Self {
        Self {
            client,
            base_uri: base_uri.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranslationClient for FunTranslationsClient {
    async fn translate(&self, text: &str, style: Style) -> Result<TranslationReply, Error> {
        let url = format!("{}/{}.json", self.base_uri, style.as_str());

        let response = self
            .client
            .post(&url)
            .form(&[("text", text)])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to call translation API: {e}")))?;

        let success = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Decode(format!("Failed to read translation response: {e}")))?;

        Ok(TranslationReply { success, body })
    }
}
