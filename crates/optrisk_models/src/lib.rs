//! # Optrisk Models (L2: Business Logic)
//!
//! Closed-form option pricing and risk analytics.
//!
//! This crate provides:
//! - Black-Scholes pricing for European calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) in the units a
//!   risk dashboard quotes them (vega/rho per percentage point, theta per
//!   calendar day)
//! - Implied volatility inversion via a bracketed Brent solver
//! - Option kind definitions (`OptionKind`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for f64/f32 computation
//! - **Enum-based option kinds** for static dispatch; the invalid-kind
//!   runtime branch of stringly-typed APIs is a type error here
//! - **Pure functions**: no shared state, no I/O, deterministic results
//! - **NaN as the "no solution" sentinel** for implied volatility, so an
//!   interactive consumer can keep running and display a message

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
