use rihla_core::FlightOffer;
use serde::Serialize;

/// Order offers by number of route legs, direct flights first.
/// Stable, so the provider's price order holds within each group.
pub fn rank_direct_first(offers: &mut [FlightOffer]) {
    offers.sort_by_key(|offer| offer.route.len());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub total: usize,
    pub direct: usize,
    pub with_transfers: usize,
}

impl SearchSummary {
    pub fn of(offers: &[FlightOffer]) -> Self {
        let direct = offers.iter().filter(|offer| offer.is_direct()).count();
        Self {
            total: offers.len(),
            direct,
            with_transfers: offers.len() - direct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rihla_core::RouteLeg;

    fn offer(price: f64, stops: &[&str]) -> FlightOffer {
        let mut cities = vec!["Dubai"];
        cities.extend_from_slice(stops);
        cities.push("London");
        let route = cities
            .windows(2)
            .map(|pair| RouteLeg { city_from: pair[0].to_string(), city_to: pair[1].to_string() })
            .collect();

        FlightOffer {
            origin_city: "Dubai".to_string(),
            origin_code: "DXB".to_string(),
            destination_city: "London".to_string(),
            destination_code: "LHR".to_string(),
            departure_date: "2026-11-05".to_string(),
            duration_seconds: None,
            duration_text: Some("7h 30m".to_string()),
            price,
            currency: "USD".to_string(),
            deep_link: "https://example.com".to_string(),
            route,
        }
    }

    #[test]
    fn test_direct_first_keeps_price_order() {
        let mut offers = vec![
            offer(100.0, &["Doha"]),
            offer(150.0, &[]),
            offer(180.0, &["Doha", "Istanbul"]),
            offer(200.0, &[]),
            offer(210.0, &["Muscat"]),
        ];

        rank_direct_first(&mut offers);

        let prices: Vec<f64> = offers.iter().map(|o| o.price).collect();
        assert_eq!(prices, vec![150.0, 200.0, 100.0, 210.0, 180.0]);
    }

    #[test]
    fn test_summary_counts() {
        let offers = vec![offer(100.0, &["Doha"]), offer(150.0, &[]), offer(180.0, &["Doha", "Istanbul"])];
        let summary = SearchSummary::of(&offers);
        assert_eq!(summary, SearchSummary { total: 3, direct: 1, with_transfers: 2 });
    }

    #[test]
    fn test_summary_counts_missing_route_as_transfer() {
        let mut unknown = offer(90.0, &[]);
        unknown.route.clear();
        let offers = vec![unknown, offer(150.0, &[])];
        let summary = SearchSummary::of(&offers);
        assert_eq!(summary, SearchSummary { total: 2, direct: 1, with_transfers: 1 });
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(SearchSummary::of(&[]), SearchSummary { total: 0, direct: 0, with_transfers: 0 });
    }
}
