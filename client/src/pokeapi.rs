use anyhow::{Context, Result};
use async_trait::async_trait;

use arena_battle::{CreatureDetail, CreatureSummary};
use arena_protocol::{Request, parse_pokemon, parse_roster_page};

use crate::config::PokeApiConfig;
use crate::provider::RosterProvider;

/// Roster provider backed by the PokeAPI HTTP catalog
#[derive(Debug, Clone)]
pub struct PokeApiProvider {
    http: reqwest::Client,
    config: PokeApiConfig,
}

impl Default for PokeApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiProvider {
    /// Provider for the public catalog and the first 151 creatures
    pub fn new() -> Self {
        Self::with_config(PokeApiConfig::default())
    }

    pub fn with_config(config: PokeApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &PokeApiConfig {
        &self.config
    }

    async fn get(&self, request: &Request) -> Result<String> {
        let url = request.to_url(&self.config.base_url);
        tracing::debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Catalog rejected {}", url))?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

#[async_trait]
impl RosterProvider for PokeApiProvider {
    async fn list_roster(&self) -> Result<Vec<CreatureSummary>> {
        let request = Request::ListPokemon {
            limit: self.config.roster_limit,
        };
        let body = self.get(&request).await?;
        decode_roster(&body)
    }

    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail> {
        let body = self.get(&Request::Pokemon(id.to_string())).await?;
        decode_detail(&body).with_context(|| format!("Bad record for {}", id))
    }
}

fn decode_roster(body: &str) -> Result<Vec<CreatureSummary>> {
    let page = parse_roster_page(body).context("Failed to parse roster listing")?;
    Ok(page
        .results
        .iter()
        .map(CreatureSummary::from_protocol)
        .collect())
}

fn decode_detail(body: &str) -> Result<CreatureDetail> {
    let record = parse_pokemon(body).context("Failed to parse creature record")?;
    Ok(CreatureDetail::from_protocol(&record))
}
