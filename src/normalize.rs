//! Mapping from raw PokeAPI JSON to the records the views render.

use serde_json::Value;

use crate::domain::{
    ListEntry, PokemonDetail, RemotePokemon, RemotePokemonSummary, StatLine,
};
use crate::error::Result;

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `special-attack` -> `Special attack`
pub fn stat_label(stat_name: &str) -> String {
    capitalize(&stat_name.replace('-', " "))
}

/// Decimeters to centimeters.
pub fn decimeters_to_cm(height: u32) -> u64 {
    u64::from(height) * 10
}

/// Hectograms to kilograms.
pub fn hectograms_to_kg(weight: u32) -> f64 {
    f64::from(weight) / 10.0
}

impl From<RemotePokemon> for PokemonDetail {
    fn from(remote: RemotePokemon) -> Self {
        PokemonDetail {
            id: remote.id,
            name: capitalize(&remote.name),
            image_url: remote.sprites.front_default,
            height_cm: decimeters_to_cm(remote.height),
            weight_kg: hectograms_to_kg(remote.weight),
            types: remote.types.iter().map(|t| capitalize(&t.kind.name)).collect(),
            abilities: remote
                .abilities
                .iter()
                .map(|a| capitalize(&a.ability.name))
                .collect(),
            stats: remote
                .stats
                .iter()
                .map(|s| StatLine {
                    name: stat_label(&s.stat.name),
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}

impl From<RemotePokemonSummary> for ListEntry {
    fn from(remote: RemotePokemonSummary) -> Self {
        ListEntry {
            id: remote.id,
            name: capitalize(&remote.name),
            image_url: remote.sprites.front_default,
        }
    }
}

/// Normalize a full detail record. Fails when a consumed field is missing or
/// has the wrong shape.
pub fn normalize_detail(raw: &Value) -> Result<PokemonDetail> {
    let remote: RemotePokemon = serde_json::from_value(raw.clone())?;
    Ok(remote.into())
}

/// Normalize the parts of a detail record the list view needs.
pub fn normalize_list_entry(raw: &Value) -> Result<ListEntry> {
    let remote: RemotePokemonSummary = serde_json::from_value(raw.clone())?;
    Ok(remote.into())
}
