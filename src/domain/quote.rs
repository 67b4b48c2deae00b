//! Simulated quote pricing behind the "Get Your Quote" calculator.
//!
//! The route distance is not looked up anywhere; it is drawn from an injected
//! RNG, so callers decide whether estimates are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use time::{macros::format_description, Date};

/// Shortest simulated route, in miles.
pub const MIN_DISTANCE: f64 = 500.0;
/// Upper bound (exclusive) of the simulated route, in miles.
pub const MAX_DISTANCE: f64 = 2000.0;
pub const RATE_PER_MILE: f64 = 1.25;
pub const BORDER_FEE: f64 = 150.0;
pub const NON_RUNNING_FEE: f64 = 75.0;

const ESTIMATE_SPREAD: f64 = 0.1;
const MILES_PER_TRANSIT_DAY: f64 = 500.0;

/// Provinces/states offered by the origin and destination selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionGroup {
    pub country: &'static str,
    pub flag: &'static str,
    pub codes: &'static [&'static str],
}

pub const REGION_GROUPS: [RegionGroup; 2] = [
    RegionGroup {
        country: "Canada",
        flag: "🇨🇦",
        codes: &["ON", "QC", "BC", "AB", "MB", "SK", "NS", "NB", "NL", "PE"],
    },
    RegionGroup {
        country: "United States",
        flag: "🇺🇸",
        codes: &["MI", "NY", "CA", "TX", "FL", "IL", "OH", "PA", "GA", "WA"],
    },
];

pub const VEHICLE_MAKES: [&str; 10] = [
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "BMW",
    "Mercedes",
    "Audi",
    "Tesla",
    "Porsche",
    "Other",
];

#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub origin_city: String,
    pub origin_region: String,
    pub destination_city: String,
    pub destination_region: String,
    pub vehicle_year: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub is_running: bool,
    pub ship_date: Option<Date>,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            origin_city: String::new(),
            origin_region: String::new(),
            destination_city: String::new(),
            destination_region: String::new(),
            vehicle_year: String::new(),
            vehicle_make: String::new(),
            vehicle_model: String::new(),
            is_running: true,
            ship_date: None,
        }
    }
}

impl QuoteRequest {
    /// The result panel only opens once both cities and a make are filled in.
    pub fn is_ready(&self) -> bool {
        [&self.origin_city, &self.destination_city, &self.vehicle_make]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn non_running_fee(&self) -> f64 {
        if self.is_running {
            0.0
        } else {
            NON_RUNNING_FEE
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteEstimate {
    pub low_estimate: u32,
    pub high_estimate: u32,
    pub transit_days: u32,
    /// Simulated route length, rounded to whole miles.
    pub distance: u32,
}

/// Draws a route distance from `rng` and prices the request against it.
pub fn estimate<R: Rng>(request: &QuoteRequest, rng: &mut R) -> QuoteEstimate {
    let distance = rng.gen_range(MIN_DISTANCE..MAX_DISTANCE);
    estimate_for_distance(request, distance)
}

pub fn estimate_for_distance(request: &QuoteRequest, distance: f64) -> QuoteEstimate {
    let distance = distance.max(0.0);
    let base = base_cost(request, distance);

    QuoteEstimate {
        low_estimate: (base * (1.0 - ESTIMATE_SPREAD)).round() as u32,
        high_estimate: (base * (1.0 + ESTIMATE_SPREAD)).round() as u32,
        transit_days: transit_days(distance),
        distance: distance.round() as u32,
    }
}

pub fn base_cost(request: &QuoteRequest, distance: f64) -> f64 {
    distance * RATE_PER_MILE + BORDER_FEE + request.non_running_fee()
}

/// One day per started 500 miles, plus a day for the border crossing.
pub fn transit_days(distance: f64) -> u32 {
    (distance.max(0.0) / MILES_PER_TRANSIT_DAY).ceil() as u32 + 1
}

/// RNG for the calculator: pinned when a seed is configured, fresh entropy otherwise.
pub fn quote_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Parses a `YYYY-MM-DD` date input, dropping dates before `today`.
pub fn accept_ship_date(input: &str, today: Date) -> Option<Date> {
    let date = Date::parse(input.trim(), format_description!("[year]-[month]-[day]")).ok()?;
    (date >= today).then_some(date)
}

/// Formats a date the way `<input type="date">` expects it.
pub fn date_input_value(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn ready_request() -> QuoteRequest {
        QuoteRequest {
            origin_city: "Toronto".into(),
            origin_region: "ON".into(),
            destination_city: "Miami".into(),
            destination_region: "FL".into(),
            vehicle_make: "Toyota".into(),
            ..QuoteRequest::default()
        }
    }

    #[test]
    fn running_vehicle_has_no_surcharge() {
        let running = ready_request();
        let mut stalled = ready_request();
        stalled.is_running = false;

        assert_eq!(running.non_running_fee(), 0.0);
        assert_eq!(stalled.non_running_fee(), NON_RUNNING_FEE);
        assert_eq!(
            base_cost(&stalled, 1000.0) - base_cost(&running, 1000.0),
            NON_RUNNING_FEE
        );
    }

    #[test]
    fn prices_a_thousand_mile_route() {
        let estimate = estimate_for_distance(&ready_request(), 1000.0);
        assert_eq!(estimate.low_estimate, 1260);
        assert_eq!(estimate.high_estimate, 1540);
        assert_eq!(estimate.transit_days, 3);
        assert_eq!(estimate.distance, 1000);
    }

    #[test]
    fn bounds_are_ordered_and_positive() {
        let mut rng = quote_rng(Some(7));
        let mut request = QuoteRequest::default();
        for round in 0..200 {
            request.is_running = round % 2 == 0;
            let estimate = estimate(&request, &mut rng);
            assert!(estimate.low_estimate > 0);
            assert!(estimate.low_estimate <= estimate.high_estimate);
            assert!((500..=2000).contains(&estimate.distance));
        }
    }

    #[test]
    fn transit_days_grow_with_distance() {
        let mut previous = 0;
        for miles in (0..=2000).step_by(25) {
            let days = transit_days(miles as f64);
            assert!(days >= 1);
            assert!(days >= previous);
            previous = days;
        }
        assert_eq!(transit_days(500.0), 2);
        assert_eq!(transit_days(500.5), 3);
        assert_eq!(transit_days(1999.9), 5);
    }

    #[test]
    fn same_seed_gives_same_estimate() {
        let request = ready_request();
        let first = estimate(&request, &mut quote_rng(Some(42)));
        let second = estimate(&request, &mut quote_rng(Some(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_draws_move_the_distance() {
        let request = ready_request();
        let mut rng = quote_rng(Some(3));
        let distances: Vec<u32> = (0..5)
            .map(|_| estimate(&request, &mut rng).distance)
            .collect();
        assert!(distances.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn empty_request_still_prices() {
        let estimate = estimate_for_distance(&QuoteRequest::default(), 0.0);
        assert_eq!(estimate.low_estimate, 135);
        assert_eq!(estimate.high_estimate, 165);
        assert_eq!(estimate.transit_days, 1);
    }

    #[test]
    fn readiness_needs_cities_and_make() {
        assert!(ready_request().is_ready());

        let mut missing_make = ready_request();
        missing_make.vehicle_make = "  ".into();
        assert!(!missing_make.is_ready());

        let mut missing_origin = ready_request();
        missing_origin.origin_city.clear();
        assert!(!missing_origin.is_ready());
    }

    #[test]
    fn ship_dates_before_today_are_dropped() {
        let today = date!(2024 - 03 - 10);
        assert_eq!(accept_ship_date("2024-03-12", today), Some(date!(2024 - 03 - 12)));
        assert_eq!(accept_ship_date("2024-03-10", today), Some(today));
        assert_eq!(accept_ship_date("2024-03-09", today), None);
        assert_eq!(accept_ship_date("", today), None);
        assert_eq!(accept_ship_date("next week", today), None);
        assert_eq!(date_input_value(today), "2024-03-10");
    }
}
