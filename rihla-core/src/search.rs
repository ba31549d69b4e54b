use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::query::ParsedQuery;

/// One bookable itinerary returned by the flight-search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub origin_city: String,
    pub origin_code: String,
    pub destination_city: String,
    pub destination_code: String,
    /// `YYYY-MM-DD` part of the local departure timestamp
    pub departure_date: String,
    pub duration_seconds: Option<u64>,
    /// Provider-formatted duration, used when no total is given
    pub duration_text: Option<String>,
    pub price: f64,
    pub currency: String,
    pub deep_link: String,
    pub route: Vec<RouteLeg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub city_from: String,
    pub city_to: String,
}

impl FlightOffer {
    /// Exactly one leg. An offer without route data is neither direct nor transferring.
    pub fn is_direct(&self) -> bool {
        self.route.len() == 1
    }

    pub fn has_transfers(&self) -> bool {
        self.route.len() > 1
    }

    pub fn transfer_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// Arrival city of every leg except the last.
    pub fn transfer_cities(&self) -> Vec<&str> {
        let stops = self.transfer_count();
        self.route.iter().take(stops).map(|leg| leg.city_to.as_str()).collect()
    }
}

/// Flight-search provider. Failures are reported as an empty list.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    async fn search(&self, query: &ParsedQuery) -> Vec<FlightOffer>;
}
