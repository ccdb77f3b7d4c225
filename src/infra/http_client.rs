use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use crate::app::ports::PokeApiPort;
use crate::config::PokeApiConfig;
use crate::constants;
use crate::domain::{is_lookup_identifier, PokemonPage};
use crate::error::{PokedexError, Result};
use crate::metrics::UpstreamMetrics;

/// PokeAPI over HTTP. One pooled client shared by every request.
#[derive(Clone)]
pub struct ReqwestPokeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestPokeApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PokedexError::Config(format!("Invalid PokeAPI base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(PokedexError::Config(format!(
                "PokeAPI base URL '{}' cannot have path segments",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(constants::user_agent())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &PokeApiConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    /// `{base}/pokemon/{id_or_name}/`, with the identifier as a single
    /// percent-encoded segment. `None` for identifiers that cannot be one
    /// segment (`url` drops `.` and `..` instead of encoding them).
    pub fn pokemon_url(&self, id_or_name: &str) -> Option<Url> {
        is_lookup_identifier(id_or_name).then(|| self.endpoint(&["pokemon", id_or_name, ""]))
    }

    /// `{base}/pokemon/?limit=..&offset=..`
    pub fn page_url(&self, limit: u32, offset: u32) -> Url {
        let mut url = self.endpoint(&["pokemon", ""]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, url: Url, not_found_key: Option<&str>) -> Result<Value> {
        let started = Instant::now();
        let result = self.send(url, not_found_key).await;
        UpstreamMetrics::record(&result, started.elapsed().as_secs_f64());
        result
    }

    async fn send(&self, url: Url, not_found_key: Option<&str>) -> Result<Value> {
        debug!("Making request to: {}", url);
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(e, &url))?;

        let status = resp.status();
        debug!("Response status: {}", status);
        if status == StatusCode::NOT_FOUND {
            if let Some(key) = not_found_key {
                return Err(PokedexError::NotFound(key.to_string()));
            }
        }
        if !status.is_success() {
            return Err(PokedexError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await.map_err(|e| classify(e, &url))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn classify(err: reqwest::Error, url: &Url) -> PokedexError {
    if err.is_timeout() {
        PokedexError::Timeout {
            url: url.to_string(),
        }
    } else {
        PokedexError::Http(err)
    }
}

#[async_trait]
impl PokeApiPort for ReqwestPokeApi {
    async fn get_pokemon(&self, id_or_name: &str) -> Result<Value> {
        let url = self
            .pokemon_url(id_or_name)
            .ok_or_else(|| PokedexError::NotFound(id_or_name.to_string()))?;
        self.get_json(url, Some(id_or_name)).await
    }

    async fn get_pokemon_page(&self, limit: u32, offset: u32) -> Result<PokemonPage> {
        let body = self.get_json(self.page_url(limit, offset), None).await?;
        Ok(serde_json::from_value(body)?)
    }
}
