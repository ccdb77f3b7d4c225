use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::app::fetch::fetch_pokemon_data;
use crate::app::ports::PokeApiPort;
use crate::constants::{ERROR_TITLE, NOT_FOUND_TITLE};
use crate::domain::PokemonDetail;
use crate::normalize::normalize_detail;

/// Context for the detail template. Exactly one of `pokemon` and
/// `error_message` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPage {
    pub title: String,
    pub pokemon: Option<PokemonDetail>,
    pub error_message: Option<String>,
}

impl DetailPage {
    fn found(pokemon: PokemonDetail) -> Self {
        Self {
            title: pokemon.name.clone(),
            pokemon: Some(pokemon),
            error_message: None,
        }
    }

    fn error(title: &str, message: String) -> Self {
        Self {
            title: title.to_string(),
            pokemon: None,
            error_message: Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Builds the detail view for one Pokémon
pub struct DetailUseCase {
    api: Arc<dyn PokeApiPort>,
}

impl DetailUseCase {
    pub fn new(api: Arc<dyn PokeApiPort>) -> Self {
        Self { api }
    }

    /// Fetch and normalize one record. Never fails: upstream and processing
    /// errors are reported through `error_message`.
    #[instrument(skip(self))]
    pub async fn build(&self, id_or_name: &str) -> DetailPage {
        info!("Attempting to fetch data for: {}", id_or_name);

        let lookup = id_or_name.to_lowercase();
        let Some(raw) = fetch_pokemon_data(self.api.as_ref(), &lookup).await else {
            return DetailPage::error(
                NOT_FOUND_TITLE,
                format!("Pokémon '{}' not found or could not be fetched.", id_or_name),
            );
        };

        match normalize_detail(&raw) {
            Ok(pokemon) => {
                info!(id = pokemon.id, "Context created for {}", pokemon.name);
                DetailPage::found(pokemon)
            }
            Err(e) => {
                warn!(error = %e, "Could not process Pokémon data for {}", id_or_name);
                DetailPage::error(
                    ERROR_TITLE,
                    format!("Error processing Pokémon data for '{}': {}", id_or_name, e),
                )
            }
        }
    }
}
