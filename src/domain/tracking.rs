use serde::{Deserialize, Serialize};

/// A shipment reference typed into the tracking dialog (AWB or booking number).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrackingQuery {
    reference: String,
}

impl TrackingQuery {
    /// Returns `None` for blank input; no lookup should be started then.
    pub fn parse(input: &str) -> Option<Self> {
        let reference = input.trim();
        if reference.is_empty() {
            return None;
        }
        Some(Self {
            reference: reference.to_string(),
        })
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingResult {
    pub status: String,
    pub location: String,
    pub eta: String,
}

impl TrackingResult {
    /// The canned answer served for every reference while tracking is simulated.
    pub fn sample_in_transit() -> Self {
        Self {
            status: "In Transit".to_string(),
            location: "Detroit, MI - Customs Cleared".to_string(),
            eta: "Estimated arrival: Tomorrow, 2:00 PM".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_references_start_no_lookup() {
        assert_eq!(TrackingQuery::parse(""), None);
        assert_eq!(TrackingQuery::parse("   \t"), None);
    }

    #[test]
    fn references_are_trimmed() {
        let query = TrackingQuery::parse("  AWB-12345 ").expect("non-blank");
        assert_eq!(query.reference(), "AWB-12345");
    }
}
