//! Site content and the simulated business rules behind the page.

pub mod catalog;
pub mod contact;
pub mod preferences;
pub mod quote;
pub mod seo;
pub mod tracking;

pub use contact::{is_valid_email, ContactField, ContactSubmission, FieldErrors, ValidContact};
pub use preferences::{Currency, Language, Preferences};
pub use quote::{QuoteEstimate, QuoteRequest};
pub use tracking::{TrackingQuery, TrackingResult};
