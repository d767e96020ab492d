//! Core library for the pokedex API
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The pokedex project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pokedex_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokedex`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by concern:
//!
//! - [`validation`]: Pokemon name validation rules
//! - [`pokemon`]: Upstream species model and the normalized info record
//! - [`style`]: Translation style selection policy
//! - [`translation`]: FunTranslations response body parsing
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert API data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokedex_core::pokemon::{to_pokemon_info, PokemonSpecies};
//!
//! // Create fixture data (no HTTP required)
//! let species: PokemonSpecies = serde_json::from_str(body)?;
//!
//! // Transform using pure function
//! let info = to_pokemon_info(&species);
//!
//! // Assert on results (no mocking needed)
//! assert!(!info.description.is_empty());
//! ```

pub mod pokemon;
pub mod style;
pub mod translation;
pub mod validation;
