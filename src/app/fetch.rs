use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::app::ports::PokeApiPort;
use crate::domain::is_lookup_identifier;
use crate::error::PokedexError;

/// Fetch one record, collapsing every failure into `None` after logging it.
/// An empty body (`{}`, `[]`, `null`, ...) counts as a failure too.
#[instrument(skip(api))]
pub async fn fetch_pokemon_data(api: &dyn PokeApiPort, id_or_name: &str) -> Option<Value> {
    if !is_lookup_identifier(id_or_name) {
        warn!("Pokémon '{}' not found", id_or_name);
        return None;
    }

    match api.get_pokemon(id_or_name).await {
        Ok(data) if is_empty_payload(&data) => {
            warn!("Empty response fetching data for {}", id_or_name);
            None
        }
        Ok(data) => {
            debug!("Successfully fetched data for {}", id_or_name);
            Some(data)
        }
        Err(PokedexError::NotFound(_)) => {
            warn!("Pokémon '{}' not found", id_or_name);
            None
        }
        Err(e @ PokedexError::Timeout { .. }) => {
            warn!(error = %e, "Timeout fetching data for {}", id_or_name);
            None
        }
        Err(e @ PokedexError::UpstreamStatus { .. }) => {
            warn!(error = %e, "HTTP error fetching data for {}", id_or_name);
            None
        }
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Error fetching data for {}", id_or_name);
            None
        }
    }
}

fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
