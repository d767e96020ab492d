use crate::pokemon::PokemonSpecies;

/// Translation style applied by the FunTranslations API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Yoda,
    Shakespeare,
}

impl Style {
    /// Path segment used by the FunTranslations API for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Yoda => "yoda",
            Style::Shakespeare => "shakespeare",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the translation style for a species
///
/// Cave dwellers (habitat name matched case-insensitively) and legendary
/// pokemon speak like Yoda; everything else gets Shakespeare. Decided on the
/// raw upstream fields, before any normalization.
pub fn choose_style(species: &PokemonSpecies) -> Style {
    let lives_in_cave = species
        .habitat
        .as_ref()
        .is_some_and(|h| h.name.eq_ignore_ascii_case("cave"));

    if lives_in_cave || species.is_legendary {
        Style::Yoda
    } else {
        Style::Shakespeare
    }
}
