//! Where contact requests, newsletter signups and tracking lookups go.
//!
//! - `SimulatedBackend` answers locally after a fixed delay (the default).
//! - `HttpBackend` posts JSON to a configured lead service.
//!
//! The UI only sees [`SharedBackend`], so swapping one for the other does not
//! touch calling code.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{TrackingQuery, TrackingResult, ValidContact};

/// Artificial latency for simulated submissions and lookups.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);
const USER_AGENT: &str = concat!("tyras-site/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

/// Acknowledgement for a delivered contact request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
}

#[async_trait]
pub trait LeadBackend: Send + Sync {
    async fn submit_contact(&self, contact: &ValidContact)
        -> Result<SubmissionReceipt, BackendError>;

    async fn subscribe(&self, email: &str) -> Result<(), BackendError>;

    async fn track(&self, query: &TrackingQuery) -> Result<TrackingResult, BackendError>;
}

pub type SharedBackend = Arc<dyn LeadBackend>;

#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(SIMULATED_LATENCY)
    }
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl LeadBackend for SimulatedBackend {
    async fn submit_contact(
        &self,
        contact: &ValidContact,
    ) -> Result<SubmissionReceipt, BackendError> {
        tokio::time::sleep(self.latency).await;
        let reference = uuid::Uuid::new_v4().to_string();
        info!(
            reference = %reference,
            vins = contact.vins().len(),
            "simulated contact submission accepted"
        );
        Ok(SubmissionReceipt { reference })
    }

    async fn subscribe(&self, email: &str) -> Result<(), BackendError> {
        debug!(domain = email.rsplit('@').next().unwrap_or_default(), "simulated newsletter signup");
        Ok(())
    }

    async fn track(&self, query: &TrackingQuery) -> Result<TrackingResult, BackendError> {
        tokio::time::sleep(self.latency).await;
        debug!(reference = query.reference(), "serving canned tracking result");
        Ok(TrackingResult::sample_in_transit())
    }
}

#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    company: Option<&'a str>,
    email: &'a str,
    phone: &'a str,
    origin: Option<&'a str>,
    destination: Option<&'a str>,
    vins: Vec<&'a str>,
    preferred_date: Option<&'a str>,
    message: &'a str,
}

impl<'a> From<&'a ValidContact> for ContactPayload<'a> {
    fn from(contact: &'a ValidContact) -> Self {
        let submission = contact.submission();
        Self {
            name: &submission.name,
            company: non_blank(&submission.company),
            email: &submission.email,
            phone: &submission.phone,
            origin: non_blank(&submission.origin),
            destination: non_blank(&submission.destination),
            vins: contact.vins(),
            preferred_date: non_blank(&submission.preferred_date),
            message: &submission.message,
        }
    }
}

#[derive(Serialize)]
struct NewsletterPayload<'a> {
    email: &'a str,
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl HttpBackend {
    pub fn new(base: &str) -> Result<Self, BackendError> {
        // `Url::join` drops the last path segment unless the base ends with a slash.
        let base_url = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> Result<reqwest::Response, BackendError> {
        let url = self.base_url.join(path)?;
        debug!(%url, "posting to lead backend");
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api(format!("{path} returned {status}")));
        }
        Ok(response)
    }

    async fn post_json<R: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<R, BackendError> {
        self.post(path, body)
            .await?
            .json::<R>()
            .await
            .map_err(|err| {
                if err.is_decode() {
                    BackendError::Decode(err)
                } else {
                    BackendError::Http(err)
                }
            })
    }
}

#[async_trait]
impl LeadBackend for HttpBackend {
    async fn submit_contact(
        &self,
        contact: &ValidContact,
    ) -> Result<SubmissionReceipt, BackendError> {
        self.post_json("contact", &ContactPayload::from(contact)).await
    }

    async fn subscribe(&self, email: &str) -> Result<(), BackendError> {
        self.post("newsletter", &NewsletterPayload { email }).await?;
        Ok(())
    }

    async fn track(&self, query: &TrackingQuery) -> Result<TrackingResult, BackendError> {
        self.post_json("tracking", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactSubmission;
    use serde_json::json;
    use tokio::time::Instant;
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn valid_contact() -> ValidContact {
        ContactSubmission {
            name: "John Smith".into(),
            email: "john@x.com".into(),
            phone: "5551234567".into(),
            vins: "1HGCM82633A004352\n".into(),
            message: "Need a quote for 2 cars".into(),
            ..ContactSubmission::default()
        }
        .validate()
        .expect("fixture is valid")
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_tracking_waits_then_answers() {
        let backend = SimulatedBackend::default();
        let query = TrackingQuery::parse("AWB-1").unwrap();

        let started = Instant::now();
        let result = backend.track(&query).await.unwrap();

        assert!(started.elapsed() >= SIMULATED_LATENCY);
        assert_eq!(result, TrackingResult::sample_in_transit());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_tracking_ignores_the_reference() {
        let backend = SimulatedBackend::new(Duration::from_millis(10));
        let first = backend.track(&TrackingQuery::parse("A").unwrap()).await.unwrap();
        let second = backend
            .track(&TrackingQuery::parse("ZZZ-999").unwrap())
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_issues_unique_receipts() {
        let backend = SimulatedBackend::default();
        let contact = valid_contact();

        let started = Instant::now();
        let first = backend.submit_contact(&contact).await.unwrap();
        let second = backend.submit_contact(&contact).await.unwrap();

        assert!(started.elapsed() >= SIMULATED_LATENCY * 2);
        assert_ne!(first.reference, second.reference);
        assert!(uuid::Uuid::parse_str(&first.reference).is_ok());
    }

    #[tokio::test]
    async fn http_backend_posts_tracking_queries() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tracking"))
            .and(body_partial_json(json!({ "reference": "AWB-77" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "Delivered",
                "location": "Miami, FL",
                "eta": "Delivered today, 9:12 AM",
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&format!("{}/api", server.uri())).unwrap();
        let result = backend
            .track(&TrackingQuery::parse(" AWB-77 ").unwrap())
            .await
            .unwrap();

        assert_eq!(result.status, "Delivered");
        assert_eq!(result.location, "Miami, FL");
    }

    #[tokio::test]
    async fn http_backend_sends_vins_as_a_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .and(body_partial_json(json!({
                "name": "John Smith",
                "company": null,
                "vins": ["1HGCM82633A004352"],
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "reference": "L-1" })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri()).unwrap();
        let receipt = backend.submit_contact(&valid_contact()).await.unwrap();
        assert_eq!(receipt.reference, "L-1");
    }

    #[tokio::test]
    async fn http_backend_reports_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/newsletter"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri()).unwrap();
        let err = backend.subscribe("a@b.com").await.unwrap_err();
        assert!(matches!(err, BackendError::Api(ref message) if message.contains("503")));
    }

    #[tokio::test]
    async fn http_backend_flags_malformed_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tracking"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri()).unwrap();
        let err = backend
            .track(&TrackingQuery::parse("AWB-1").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)), "{err:?}");
    }

    #[test]
    fn base_url_gains_a_trailing_slash() {
        let backend = HttpBackend::new("https://leads.example.com/v1").unwrap();
        assert_eq!(backend.base_url().as_str(), "https://leads.example.com/v1/");
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(BackendError::InvalidUrl(_))
        ));
    }
}
