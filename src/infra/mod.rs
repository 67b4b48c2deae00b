pub mod backend;

pub use backend::{HttpBackend, LeadBackend, SharedBackend, SimulatedBackend};
