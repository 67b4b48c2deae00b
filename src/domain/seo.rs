//! Document head metadata: title, description, Open Graph tags and the
//! schema.org business listing search engines read.

use serde::Serialize;

use super::catalog::{Company, COMPANY};

pub const PAGE_TITLE: &str = "TYRAS Group | Cross-Border Auto Logistics Canada ↔ USA";
pub const PAGE_DESCRIPTION: &str = "Door-to-door vehicle transport between Canada and the United States. Fully bonded customs brokerage, insured carriers, and 24/7 tracking. Get an instant quote.";
pub const PAGE_KEYWORDS: &str = "auto transport, vehicle shipping, cross-border logistics, Canada USA car transport, car carrier, customs brokerage";
pub const OG_TITLE: &str = "TYRAS Group | Cross-Border Auto Logistics";
pub const OG_DESCRIPTION: &str =
    "Your vehicles. Across the border. Faster. Door-to-door auto logistics Canada ↔ USA.";
pub const OG_TYPE: &str = "website";

#[derive(Debug, Serialize)]
pub struct BusinessListing {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: [&'static str; 2],
    name: &'static str,
    description: &'static str,
    url: &'static str,
    telephone: &'static str,
    email: &'static str,
    address: PostalAddress,
    #[serde(rename = "areaServed")]
    area_served: [Country; 2],
    #[serde(rename = "serviceType")]
    service_type: &'static str,
    #[serde(rename = "priceRange")]
    price_range: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    street_address: &'static str,
    address_locality: &'static str,
    address_region: &'static str,
    postal_code: &'static str,
    address_country: &'static str,
}

#[derive(Debug, Serialize)]
struct Country {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

impl BusinessListing {
    pub fn for_company(company: &Company) -> Self {
        Self {
            context: "https://schema.org",
            kind: ["LocalBusiness", "TransportationService"],
            name: company.legal_name,
            description: "Cross-border auto logistics between Canada and the United States. Door-to-door vehicle transport, fully bonded and insured.",
            url: company.url,
            telephone: company.phone_e164,
            email: company.email,
            address: PostalAddress {
                kind: "PostalAddress",
                street_address: company.street,
                address_locality: company.locality,
                address_region: company.region,
                postal_code: company.postal_code,
                address_country: company.country,
            },
            area_served: [
                Country { kind: "Country", name: "Canada" },
                Country { kind: "Country", name: "United States" },
            ],
            service_type: "Vehicle Transport",
            price_range: "$$",
        }
    }
}

/// JSON-LD payload for the `<script type="application/ld+json">` tag.
pub fn json_ld() -> String {
    serde_json::to_string(&BusinessListing::for_company(&COMPANY)).unwrap_or_default()
}

pub fn canonical_url() -> &'static str {
    COMPANY.url
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn listing_uses_schema_org_keys() {
        let value: Value = serde_json::from_str(&json_ld()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"][0], "LocalBusiness");
        assert_eq!(value["@type"][1], "TransportationService");
        assert_eq!(value["name"], "TYRAS Group");
        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["postalCode"], "M5V 2K7");
        assert_eq!(value["address"]["addressCountry"], "CA");
        assert_eq!(value["areaServed"][1]["name"], "United States");
        assert_eq!(value["priceRange"], "$$");
    }

    #[test]
    fn canonical_matches_listing_url() {
        let value: Value = serde_json::from_str(&json_ld()).unwrap();
        assert_eq!(value["url"], canonical_url());
    }
}
