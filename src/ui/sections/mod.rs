//! The landing page's sections, top to bottom.

pub mod careers;
pub mod contact;
pub mod coverage;
pub mod hero;
pub mod how_it_works;
pub mod quote;
pub mod safety;
pub mod services;
pub mod testimonials;

pub use careers::Careers;
pub use contact::Contact;
pub use coverage::CoverageMap;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use quote::QuoteCalculator;
pub use safety::Safety;
pub use services::Services;
pub use testimonials::Testimonials;
