use std::sync::Arc;

use log::{debug, info};

use crate::cache::InfoCache;
use crate::clients::{InfoClient, TranslationClient};
use crate::error::ApiError;
use pokedex_core::pokemon::{english_flavor_text, to_pokemon_info, PokemonInfo, PokemonSpecies};
use pokedex_core::style::{choose_style, Style};
use pokedex_core::translation::extract_translated;
use pokedex_core::validation::validate_name;

/// Request orchestrator for the two pokedex operations
///
/// Owns the cache and the upstream clients; each operation is a linear
/// pipeline of validate, fetch, map, and (for the translated variant) a
/// best-effort translation step.
pub struct PokedexService {
    info_client: Arc<dyn InfoClient>,
    translation_client: Arc<dyn TranslationClient>,
    cache: InfoCache,
}

impl PokedexService {
    pub fn new(
        info_client: Arc<dyn InfoClient>,
        translation_client: Arc<dyn TranslationClient>,
        cache: InfoCache,
    ) -> Self {
        Self {
            info_client,
            translation_client,
            cache,
        }
    }

    /// Get normalized info for a pokemon by name
    pub async fn pokemon_info(&self, name: &str) -> Result<PokemonInfo, ApiError> {
        debug!("Getting pokemon info for {name}");

        self.validate(name)?;

        if let Some(cached) = self.cache.get(name) {
            debug!("Cache hit for {name}");
            return Ok(cached);
        }

        let species = self.fetch(name).await?;
        let info = to_pokemon_info(&species);

        self.cache.insert(name, info.clone());

        Ok(info)
    }

    /// Get normalized info with the description rewritten in a fun style
    ///
    /// Translations are never cached: every call re-fetches the raw data and
    /// re-translates.
    pub async fn translated_pokemon_info(&self, name: &str) -> Result<PokemonInfo, ApiError> {
        debug!("Getting translated pokemon info for {name}");

        self.validate(name)?;

        let species = self.fetch(name).await?;

        let description = english_flavor_text(&species).unwrap_or_default();
        if description.trim().is_empty() {
            // Nothing to translate; the plain mapped record already carries
            // the default description.
            return Ok(to_pokemon_info(&species));
        }

        let style = choose_style(&species);
        let translated = self.translate_or_original(description, style).await;

        let mut info = to_pokemon_info(&species);
        info.description = translated;

        Ok(info)
    }

    fn validate(&self, name: &str) -> Result<(), ApiError> {
        let validation = validate_name(name);

        if let Some(message) = validation.first_message() {
            info!("Validation failed for {name}: {message}");
            return Err(ApiError::InvalidName(message.to_string()));
        }

        Ok(())
    }

    async fn fetch(&self, name: &str) -> Result<PokemonSpecies, ApiError> {
        match self
            .info_client
            .fetch_species(name)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(species) => Ok(species),
            None => {
                info!("Pokemon not found: {name}");
                Err(ApiError::NotFound(name.to_string()))
            }
        }
    }

    /// Translate text, falling back to the input on any failure
    ///
    /// Total: transport errors, non-success statuses, unparseable bodies, and
    /// empty translations all collapse to returning the text unchanged. No
    /// retries, nothing propagates to the caller.
    async fn translate_or_original(&self, text: &str, style: Style) -> String {
        let reply = match self.translation_client.translate(text, style).await {
            Ok(reply) => reply,
            Err(_) => return text.to_string(),
        };

        if !reply.success {
            return text.to_string();
        }

        extract_translated(&reply.body).unwrap_or_else(|| text.to_string())
    }
}
