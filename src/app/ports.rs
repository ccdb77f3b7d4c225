use async_trait::async_trait;
use serde_json::Value;

use crate::domain::PokemonPage;
use crate::error::Result;

/// Read access to PokeAPI.
#[async_trait]
pub trait PokeApiPort: Send + Sync {
    /// `GET {base}/pokemon/{id_or_name}/`, returning the parsed JSON body.
    async fn get_pokemon(&self, id_or_name: &str) -> Result<Value>;

    /// `GET {base}/pokemon/?limit={limit}&offset={offset}`
    async fn get_pokemon_page(&self, limit: u32, offset: u32) -> Result<PokemonPage>;
}
