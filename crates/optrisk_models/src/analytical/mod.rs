//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form pricing/risk kernel:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Implied volatility inversion via a bracketed Brent solver
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports f64 and f32 computation
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy
//! - **NaN propagation at singularities**: T = 0 inputs evaluate the raw
//!   formula; the undefined result is the caller's documented edge case

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use implied_vol::{implied_volatility, implied_volatility_with_config};
