//! Implied volatility inversion.
//!
//! Finds the volatility σ at which the Black-Scholes price matches an
//! observed market price, by running a bracketed Brent root-finder over
//! σ ∈ [1e-6, 5.0].
//!
//! ## "No solution" convention
//!
//! The result is NaN — not an error — whenever no volatility reproduces the
//! market price:
//! - the bracket contains no sign change (market price outside the
//!   arbitrage-free bounds, e.g. below intrinsic value),
//! - the solver hits its iteration cap without converging,
//! - the converged root sits at the degenerate lower boundary (< 1e-5).
//!
//! Interactive consumers poll this function on every input change; NaN lets
//! them display "no solution" and keep running.

use num_traits::Float;
use optrisk_core::math::solvers::{BrentSolver, SolverConfig};

use super::black_scholes::BlackScholes;
use crate::instruments::OptionKind;

/// Lower end of the volatility search bracket (0.0001% annualised).
pub const VOL_LOWER_BOUND: f64 = 1e-6;

/// Upper end of the volatility search bracket (500% annualised).
pub const VOL_UPPER_BOUND: f64 = 5.0;

/// Roots below this level are boundary artefacts, not physical volatilities.
const DEGENERATE_VOL: f64 = 1e-5;

/// Large finite stand-in for an undefined model price, so the root-finder
/// never samples a non-finite objective value.
const UNDEFINED_PRICE_SENTINEL: f64 = 1e10;

/// Computes the implied volatility for an observed market price.
///
/// Runs [`BrentSolver`] with its default configuration (tolerance 1e-10,
/// iteration cap 100) on the objective
/// `f(σ) = price(S, K, T, r, σ, kind) − market_price`.
///
/// # Arguments
/// * `market_price` - Observed option price
/// * `spot` - Current spot price (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiration in years (T)
/// * `rate` - Risk-free interest rate (annualised, decimal)
/// * `kind` - Call or put
///
/// # Returns
/// The implied volatility in [1e-5, 5.0], or NaN when no solution exists.
///
/// # Examples
/// ```
/// use optrisk_models::analytical::{implied_volatility, BlackScholes};
/// use optrisk_models::instruments::OptionKind;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.25).unwrap();
/// let price = bs.price_call(105.0, 0.5);
///
/// let vol = implied_volatility(price, 100.0, 105.0, 0.5, 0.05, OptionKind::Call);
/// assert!((vol - 0.25).abs() < 1e-4);
///
/// // Below intrinsic value: no arbitrage-free volatility exists
/// let none = implied_volatility(1.0_f64, 120.0, 100.0, 0.5, 0.05, OptionKind::Call);
/// assert!(none.is_nan());
/// ```
pub fn implied_volatility<T: Float>(
    market_price: T,
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    kind: OptionKind,
) -> T {
    implied_volatility_with_config(
        market_price,
        spot,
        strike,
        expiry,
        rate,
        kind,
        SolverConfig::default(),
    )
}

/// Computes the implied volatility with a caller-supplied solver
/// configuration.
///
/// Same semantics as [`implied_volatility`]; the configuration controls the
/// convergence tolerance on σ and the iteration cap.
pub fn implied_volatility_with_config<T: Float>(
    market_price: T,
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    kind: OptionKind,
    config: SolverConfig<T>,
) -> T {
    let nan = T::nan();

    if !market_price.is_finite() || !spot.is_finite() || !strike.is_finite() {
        return nan;
    }

    let sentinel = T::from(UNDEFINED_PRICE_SENTINEL).unwrap();

    let objective = |sigma: T| {
        if sigma <= T::zero() {
            return -market_price;
        }
        let price = match BlackScholes::new(spot, rate, sigma) {
            Ok(model) => model.price(strike, expiry, kind),
            Err(_) => return sentinel,
        };
        if price.is_finite() {
            price - market_price
        } else {
            sentinel
        }
    };

    let lo = T::from(VOL_LOWER_BOUND).unwrap();
    let hi = T::from(VOL_UPPER_BOUND).unwrap();
    let degenerate = T::from(DEGENERATE_VOL).unwrap();

    let solver = BrentSolver::new(config);
    match solver.find_root(objective, lo, hi) {
        // A root at the bracket's lower boundary is not a physical vol
        Ok(root) if root >= degenerate => root,
        Ok(_) | Err(_) => nan,
    }
}
