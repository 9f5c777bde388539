//! Trip catalog — in-memory trips with price-band, text and sort filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::selector::RangeListener;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub title: String,
    pub destination: String,
    pub price: f64,
    pub nights: u32,
    pub rating: f64,
    pub departs: NaiveDate,
}

/// Sort order for a filtered trip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    Rating,
    Departure,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
        SortKey::Departure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price ↑",
            SortKey::PriceDesc => "price ↓",
            SortKey::Rating => "rating",
            SortKey::Departure => "departure",
        }
    }

    pub fn next(self) -> SortKey {
        match self {
            SortKey::PriceAsc => SortKey::PriceDesc,
            SortKey::PriceDesc => SortKey::Rating,
            SortKey::Rating => SortKey::Departure,
            SortKey::Departure => SortKey::PriceAsc,
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "price" | "price-asc" | "cheapest" => Ok(SortKey::PriceAsc),
            "price-desc" | "priciest" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::Rating),
            "departure" | "date" => Ok(SortKey::Departure),
            other => Err(format!(
                "unknown sort '{other}' (expected price, price-desc, rating, departure)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripQuery {
    /// Inclusive price band.
    pub price: Option<(f64, f64)>,
    /// Case-insensitive substring of title or destination. Empty matches all.
    pub text: String,
    pub sort: SortKey,
}

impl TripQuery {
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some((lo, hi)) = self.price {
            if trip.price < lo || trip.price > hi {
                return false;
            }
        }
        let needle = self.text.trim().to_lowercase();
        needle.is_empty()
            || trip.title.to_lowercase().contains(&needle)
            || trip.destination.to_lowercase().contains(&needle)
    }
}

/// A query follows a price selector: each handle change moves one end of
/// the band.
impl RangeListener for TripQuery {
    fn on_low_change(&mut self, value: f64) {
        let high = self.price.map_or(value, |(_, high)| high);
        self.price = Some((value, high));
    }

    fn on_high_change(&mut self, value: f64) {
        let low = self.price.map_or(value, |(low, _)| low);
        self.price = Some((low, value));
    }
}

/// Trips matching `query`, sorted by its key. Ties keep catalog order.
pub fn filter_trips<'a>(trips: &'a [Trip], query: &TripQuery) -> Vec<&'a Trip> {
    let mut out: Vec<&Trip> = trips.iter().filter(|t| query.matches(t)).collect();
    match query.sort {
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Departure => out.sort_by_key(|t| t.departs),
    }
    out
}

/// Cheapest and priciest trip, or `None` for an empty catalog.
pub fn price_bounds(trips: &[Trip]) -> Option<(f64, f64)> {
    trips.iter().fold(None, |acc, t| match acc {
        None => Some((t.price, t.price)),
        Some((lo, hi)) => Some((lo.min(t.price), hi.max(t.price))),
    })
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn trip(
    id: u32,
    title: &str,
    destination: &str,
    price: f64,
    nights: u32,
    rating: f64,
    departs: NaiveDate,
) -> Trip {
    Trip {
        id,
        title: title.to_string(),
        destination: destination.to_string(),
        price,
        nights,
        rating,
        departs,
    }
}

/// Mock catalog used by the TUI and CLI.
pub fn sample_trips() -> Vec<Trip> {
    vec![
        trip(1, "Fjord Cruise", "Bergen, Norway", 2150.0, 7, 4.7, date(2026, 6, 12)),
        trip(2, "Old Town Weekend", "Prague, Czechia", 420.0, 2, 4.4, date(2026, 3, 6)),
        trip(3, "Island Hopping", "Cyclades, Greece", 1380.0, 9, 4.8, date(2026, 7, 1)),
        trip(4, "Safari Lodge", "Serengeti, Tanzania", 4650.0, 8, 4.9, date(2026, 9, 14)),
        trip(5, "Temple Trail", "Kyoto, Japan", 2890.0, 10, 4.6, date(2026, 4, 2)),
        trip(6, "Desert Camp", "Wadi Rum, Jordan", 960.0, 4, 4.3, date(2026, 11, 20)),
        trip(7, "City Lights", "Lisbon, Portugal", 610.0, 3, 4.5, date(2026, 5, 8)),
        trip(8, "Rainforest Trek", "Monteverde, Costa Rica", 1720.0, 6, 4.2, date(2026, 2, 17)),
        trip(9, "Northern Lights", "Tromsø, Norway", 1990.0, 5, 4.6, date(2026, 1, 23)),
        trip(10, "Vineyard Escape", "Mendoza, Argentina", 1240.0, 6, 4.1, date(2026, 3, 28)),
        trip(11, "Coral Reef Dive", "Cairns, Australia", 3540.0, 9, 4.7, date(2026, 10, 3)),
        trip(12, "Canal Stroll", "Amsterdam, Netherlands", 380.0, 2, 4.0, date(2026, 4, 24)),
    ]
}
