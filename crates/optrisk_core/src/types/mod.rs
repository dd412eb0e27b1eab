//! Shared value types and error taxonomy.

pub mod error;

pub use error::{PricingError, SolverError};
