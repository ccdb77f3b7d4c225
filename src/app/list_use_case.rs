use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::app::fetch::fetch_pokemon_data;
use crate::app::ports::PokeApiPort;
use crate::constants::LIST_TITLE;
use crate::domain::ListEntry;
use crate::normalize::normalize_list_entry;

/// Context for the list template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage {
    pub title: String,
    pub pokemons: Vec<ListEntry>,
}

impl ListPage {
    fn new(pokemons: Vec<ListEntry>) -> Self {
        Self {
            title: LIST_TITLE.to_string(),
            pokemons,
        }
    }
}

/// Builds the list view: one page of summaries, then one detail fetch per
/// summary for its ID and sprite.
pub struct ListUseCase {
    api: Arc<dyn PokeApiPort>,
    limit: u32,
    offset: u32,
}

impl ListUseCase {
    pub fn new(api: Arc<dyn PokeApiPort>, limit: u32, offset: u32) -> Self {
        Self { api, limit, offset }
    }

    /// Never fails. A failed summary fetch yields an empty list; a failed or
    /// malformed detail record drops that entry.
    #[instrument(skip(self), fields(limit = self.limit, offset = self.offset))]
    pub async fn build(&self) -> ListPage {
        let page = match self.api.get_pokemon_page(self.limit, self.offset).await {
            Ok(page) => page,
            Err(e) => {
                error!(error = %e, "Error fetching Pokémon list");
                return ListPage::new(Vec::new());
            }
        };

        let mut entries = Vec::with_capacity(page.results.len());
        for summary in &page.results {
            let Some(raw) = fetch_pokemon_data(self.api.as_ref(), &summary.name).await else {
                debug!("Dropping {} from list", summary.name);
                continue;
            };
            match normalize_list_entry(&raw) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(error = %e, "Dropping {} from list", summary.name),
            }
        }

        entries.sort_by_key(|entry| entry.id);
        info!(
            "Assembled {} of {} Pokémon",
            entries.len(),
            page.results.len()
        );
        ListPage::new(entries)
    }
}
