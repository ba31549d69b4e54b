use async_trait::async_trait;
use reqwest::StatusCode;
use rihla_core::{AirportResolver, CoreResult, FlightOffer, FlightSearch, ParsedQuery};
use rihla_store::app_config::KiwiConfig;
use tracing::{debug, error, info, warn};

use crate::models::{LocationsResponse, SearchResponse};

#[derive(Debug, thiserror::Error)]
pub enum KiwiError {
    #[error("Kiwi request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Kiwi responded with status {0}")]
    Status(StatusCode),
    #[error("Kiwi response could not be decoded: {0}")]
    Decode(reqwest::Error),
    #[error("No airport matches {0:?}")]
    NotFound(String),
}

/// Client for the Kiwi Tequila locations and search APIs.
#[derive(Clone)]
pub struct KiwiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    currency: String,
    result_limit: u32,
}

impl KiwiClient {
    pub fn new(config: &KiwiConfig) -> Result<Self, KiwiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            currency: config.currency.clone(),
            result_limit: config.result_limit,
        })
    }

    /// Top airport match for a free-text place name.
    pub async fn lookup_airport(&self, place: &str) -> Result<String, KiwiError> {
        let resp = self
            .http
            .get(format!("{}/locations/query", self.base_url))
            .header("apikey", &self.api_key)
            .query(&[("term", place), ("location_types", "airport"), ("limit", "1")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(KiwiError::Status(resp.status()));
        }

        let body: LocationsResponse = resp.json().await.map_err(KiwiError::Decode)?;
        body.locations
            .into_iter()
            .next()
            .and_then(|location| location.code)
            .ok_or_else(|| KiwiError::NotFound(place.to_string()))
    }

    /// One-way offers for the query's route and day, cheapest first.
    pub async fn search_offers(&self, query: &ParsedQuery) -> Result<Vec<FlightOffer>, KiwiError> {
        let limit = self.result_limit.to_string();
        let resp = self
            .http
            .get(format!("{}/v2/search", self.base_url))
            .header("apikey", &self.api_key)
            .query(&[
                ("fly_from", query.from.as_str()),
                ("fly_to", query.to.as_str()),
                ("date_from", query.date.as_str()),
                ("date_to", query.date.as_str()),
                ("curr", self.currency.as_str()),
                ("limit", limit.as_str()),
                ("sort", "price"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(KiwiError::Status(resp.status()));
        }

        let body: SearchResponse = resp.json().await.map_err(KiwiError::Decode)?;
        Ok(body
            .data
            .into_iter()
            .map(|flight| flight.into_offer(&self.currency))
            .collect())
    }
}

#[async_trait]
impl AirportResolver for KiwiClient {
    async fn resolve(&self, place: &str) -> CoreResult<Option<String>> {
        match self.lookup_airport(place).await {
            Ok(code) => {
                debug!("Resolved {:?} to {}", place, code);
                Ok(Some(code))
            }
            Err(KiwiError::NotFound(_)) => Ok(None),
            Err(e) => {
                warn!("Error fetching IATA code for {:?}: {}", place, e);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl FlightSearch for KiwiClient {
    async fn search(&self, query: &ParsedQuery) -> Vec<FlightOffer> {
        match self.search_offers(query).await {
            Ok(offers) => {
                info!("Found {} offers {} -> {} on {}", offers.len(), query.from, query.to, query.date);
                offers
            }
            Err(e) => {
                error!("Flight search error: {}", e);
                Vec::new()
            }
        }
    }
}
