//! Data shapes for the upstream PokeAPI records and the view-facing records
//! derived from them.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Upstream records (as served by PokeAPI)
// ---------------------------------------------------------------------------

/// A single record from `GET /pokemon/{id_or_name}/`. Only the consumed
/// fields are declared; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePokemon {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatEntry>,
}

/// The subset of a detail record needed for one row of the list view.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePokemonSummary {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    /// The key must be present, the value may be null.
    #[serde(deserialize_with = "present_but_nullable")]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub stat: NamedResource,
    pub base_stat: u32,
}

/// One page from `GET /pokemon/?limit=..&offset=..`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonPage {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Whether `id_or_name` can be looked up as one path segment. Empty, `.` and
/// `..` would resolve to a different endpoint.
pub fn is_lookup_identifier(id_or_name: &str) -> bool {
    !matches!(id_or_name, "" | "." | "..")
}

fn present_but_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

// ---------------------------------------------------------------------------
// View records
// ---------------------------------------------------------------------------

/// Flattened record rendered by the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub height_cm: u64,
    pub weight_kg: f64,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<StatLine>,
}

impl PokemonDetail {
    /// Weight with one decimal place, e.g. `6.0`.
    pub fn weight_display(&self) -> String {
        format!("{:.1}", self.weight_kg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub value: u32,
}

/// One row of the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
}
