//! Stub upstream clients shared by the service and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::{InfoClient, TranslationClient, TranslationReply};
use crate::error::Error;
use pokedex_core::pokemon::{FlavorTextEntry, Habitat, Language, PokemonSpecies};
use pokedex_core::style::Style;

pub fn create_test_species() -> PokemonSpecies {
    PokemonSpecies {
        name: "pikachu".to_string(),
        habitat: Some(Habitat {
            name: "forest".to_string(),
        }),
        is_legendary: false,
        flavor_text_entries: vec![FlavorTextEntry {
            flavor_text: "Test\ndescription".to_string(),
            language: Language {
                name: "en".to_string(),
            },
        }],
    }
}

pub struct StubInfoClient {
    species: Option<PokemonSpecies>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubInfoClient {
    pub fn with_species(species: PokemonSpecies) -> Self {
        Self {
            species: Some(species),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn not_found() -> Self {
        Self {
            species: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            species: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InfoClient for StubInfoClient {
    async fn fetch_species(&self, _name: &str) -> Result<Option<PokemonSpecies>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::UpstreamStatus(500));
        }
        Ok(self.species.clone())
    }
}

enum TranslationBehavior {
    /// 200 with a well-formed FunTranslations body
    Translate(String),
    /// Non-success status with an error body
    Reject,
    /// Transport failure
    Unreachable,
}

pub struct StubTranslationClient {
    behavior: TranslationBehavior,
    calls: AtomicUsize,
    last_style: Mutex<Option<String>>,
}

impl StubTranslationClient {
    pub fn translating(translated: &str) -> Self {
        Self::with_behavior(TranslationBehavior::Translate(translated.to_string()))
    }

    pub fn rejecting() -> Self {
        Self::with_behavior(TranslationBehavior::Reject)
    }

    pub fn unreachable() -> Self {
        Self::with_behavior(TranslationBehavior::Unreachable)
    }

    fn with_behavior(behavior: TranslationBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_style: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Style requested on the most recent call
    pub fn last_style(&self) -> Option<String> {
        self.last_style.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationClient for StubTranslationClient {
    async fn translate(&self, _text: &str, style: Style) -> Result<TranslationReply, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_style.lock().unwrap() = Some(style.as_str().to_string());

        match &self.behavior {
            TranslationBehavior::Translate(translated) => Ok(TranslationReply {
                success: true,
                body: serde_json::json!({"contents": {"translated": translated}}).to_string(),
            }),
            TranslationBehavior::Reject => Ok(TranslationReply {
                success: false,
                body: r#"{"error": "Too Many Requests"}"#.to_string(),
            }),
            TranslationBehavior::Unreachable => {
                Err(Error::Network("connection refused".to_string()))
            }
        }
    }
}
