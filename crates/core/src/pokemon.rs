use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pokemon species from the PokeAPI
///
/// Raw upstream shape, constructed per fetch and discarded after mapping.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokemonSpecies {
    pub name: String,
    pub habitat: Option<Habitat>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Habitat {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Language {
    pub name: String,
}

/// Normalized pokemon record exposed over the API
///
/// Description and habitat always hold a value: absent fields are resolved to
/// a default string at construction time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonInfo {
    pub name: String,
    pub description: String,
    pub habitat: String,
    pub is_legendary: bool,
}

pub const NO_DESCRIPTION: &str = "No english description available";
pub const UNKNOWN_HABITAT: &str = "Pokemon habitat is unknown";

/// First flavor text entry written in English, if any
///
/// Language codes are matched exactly ("en", case-sensitive).
pub fn english_flavor_text(species: &PokemonSpecies) -> Option<&str> {
    species
        .flavor_text_entries
        .iter()
        .find(|e| e.language.name == "en")
        .map(|e| e.flavor_text.as_str())
}

/// Collapse every run of whitespace to a single space and trim the result
///
/// PokeAPI flavor text is littered with `\n`, `\t`, `\r` and form feeds.
/// Idempotent: collapsing an already-collapsed string is a no-op.
pub fn collapse_whitespace(text: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(text, " ").trim().to_string()
}

/// Map a raw species into the normalized record
///
/// Total: never fails, whatever the upstream left out. A present English
/// entry is used even when it collapses to an empty string; only a missing
/// entry produces the default message.
pub fn to_pokemon_info(species: &PokemonSpecies) -> PokemonInfo {
    let description = match english_flavor_text(species) {
        Some(text) => collapse_whitespace(text),
        None => NO_DESCRIPTION.to_string(),
    };

    let habitat = species
        .habitat
        .as_ref()
        .map(|h| h.name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .unwrap_or_else(|| UNKNOWN_HABITAT.to_string());

    PokemonInfo {
        name: species.name.clone(),
        description,
        habitat,
        is_legendary: species.is_legendary,
    }
}
