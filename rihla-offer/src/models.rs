use rihla_core::{FlightOffer, RouteLeg};
use serde::Deserialize;

// ============================================================================
// Tequila `locations/query`
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub code: Option<String>,
}

// ============================================================================
// Tequila `v2/search`
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<KiwiFlight>,
}

#[derive(Debug, Deserialize)]
pub struct KiwiFlight {
    #[serde(rename = "flyFrom")]
    pub fly_from: String,
    #[serde(rename = "flyTo")]
    pub fly_to: String,
    #[serde(rename = "cityFrom")]
    pub city_from: String,
    #[serde(rename = "cityTo")]
    pub city_to: String,
    pub price: f64,
    pub local_departure: String,
    pub deep_link: String,
    pub duration: Option<KiwiDuration>,
    pub fly_duration: Option<String>,
    #[serde(default)]
    pub route: Vec<KiwiRouteLeg>,
}

#[derive(Debug, Deserialize)]
pub struct KiwiDuration {
    pub total: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct KiwiRouteLeg {
    #[serde(rename = "cityFrom")]
    pub city_from: String,
    #[serde(rename = "cityTo")]
    pub city_to: String,
}

impl KiwiFlight {
    pub fn into_offer(self, currency: &str) -> FlightOffer {
        let departure_date = self
            .local_departure
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string();

        FlightOffer {
            origin_city: self.city_from,
            origin_code: self.fly_from,
            destination_city: self.city_to,
            destination_code: self.fly_to,
            departure_date,
            duration_seconds: self.duration.and_then(|d| d.total).filter(|total| *total > 0),
            duration_text: self.fly_duration,
            price: self.price,
            currency: currency.to_string(),
            deep_link: self.deep_link,
            route: self
                .route
                .into_iter()
                .map(|leg| RouteLeg { city_from: leg.city_from, city_to: leg.city_to })
                .collect(),
        }
    }
}
