use crate::prelude::*;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::cache::InfoCache;
use crate::clients::{FunTranslationsClient, PokeApiClient};
use crate::error::ApiError;
use crate::service::PokedexService;
use pokedex_core::pokemon::PokemonInfo;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "POKEDEX_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "POKEDEX_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Base URI of the pokemon data API
    #[arg(
        long,
        env = "POKEDEX_POKEAPI_URI",
        default_value = "https://pokeapi.co/api/v2"
    )]
    pub pokeapi_uri: String,

    /// Base URI of the translation API
    #[arg(
        long,
        env = "POKEDEX_TRANSLATION_URI",
        default_value = "https://api.funtranslations.com/translate"
    )]
    pub translation_uri: String,

    /// Seconds a pokemon info response stays cached
    #[arg(long, env = "POKEDEX_CACHE_TTL", default_value = "300")]
    pub cache_ttl: u64,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("PokeAPI base: {}", options.pokeapi_uri);
        eprintln!("Translation API base: {}", options.translation_uri);
    }

    let client = reqwest::Client::new();
    let service = Arc::new(PokedexService::new(
        Arc::new(PokeApiClient::new(client.clone(), options.pokeapi_uri)),
        Arc::new(FunTranslationsClient::new(client, options.translation_uri)),
        InfoCache::new(Duration::from_secs(options.cache_ttl)),
    ));

    let app_router = router(service);

    let addr = format!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Pokedex API listening on http://{addr}");

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(service: Arc<PokedexService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/pokemon/{name}", get(pokemon_info))
        .route("/pokemon/translated/{name}", get(translated_pokemon_info))
        .layer(cors)
        .with_state(service)
}

async fn pokemon_info(
    State(service): State<Arc<PokedexService>>,
    Path(name): Path<String>,
) -> Result<Json<PokemonInfo>, ApiError> {
    log::info!("GetPokemon endpoint called for {name}");
    service.pokemon_info(&name).await.map(Json)
}

async fn translated_pokemon_info(
    State(service): State<Arc<PokedexService>>,
    Path(name): Path<String>,
) -> Result<Json<PokemonInfo>, ApiError> {
    log::info!("GetTranslatedPokemon endpoint called for {name}");
    service.translated_pokemon_info(&name).await.map(Json)
}
