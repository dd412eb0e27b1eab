//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form pricing and analytical Greeks for
//! European call and put options under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Units
//!
//! Greeks are quoted the way a risk dashboard consumes them:
//! - Vega and Rho are per 1 percentage point move (raw sensitivity × 0.01)
//! - Theta is per calendar day (annual decay ÷ 365)
//!
//! ## Degenerate inputs
//!
//! The formula is evaluated raw: `expiry = 0` divides by zero in d₁ and the
//! undefined value (NaN or an infinite limit) propagates to the caller.
//! Callers wanting expiry behaviour should use
//! [`OptionKind::intrinsic`](crate::instruments::OptionKind::intrinsic)
//! themselves.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionKind;

/// Scale expressing vega and rho per 1-percentage-point move of the input.
const PER_PERCENTAGE_POINT: f64 = 0.01;

/// Calendar days per year, used to quote theta per day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Full set of first- and second-order sensitivities for one option.
///
/// All five fields are functions of the same (S, K, T, r, σ, kind) inputs;
/// `gamma` and `vega` are kind-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: T,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: T,
    /// Vega: ∂V/∂σ per 1 percentage point of volatility.
    pub vega: T,
    /// Theta: time decay per calendar day.
    pub theta: T,
    /// Rho: ∂V/∂r per 1 percentage point of rate.
    pub rho: T,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use optrisk_models::analytical::BlackScholes;
/// use optrisk_models::instruments::OptionKind;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price(100.0, 1.0, OptionKind::Call);
/// let put_price = bs.price(100.0, 1.0, OptionKind::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised; may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use optrisk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    ///
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// No guard at `expiry = 0`: the division by σ√T = 0 yields ±∞ (or NaN
    /// exactly at the money) and propagates.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Computes the option price for the given kind.
    ///
    /// # Examples
    /// ```
    /// use optrisk_models::analytical::BlackScholes;
    /// use optrisk_models::instruments::OptionKind;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert_eq!(
    ///     bs.price(100.0, 1.0, OptionKind::Call),
    ///     bs.price_call(100.0, 1.0),
    /// );
    /// ```
    #[inline]
    pub fn price(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁), in (0, 1)
    /// - Put Delta = N(d₁) - 1, in (-1, 0)
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        let n_d1 = norm_cdf(self.d1(strike, expiry));

        match kind {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - T::one(),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    ///
    /// Identical for calls and puts; always non-negative.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);

        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega per 1 percentage point of volatility.
    ///
    /// Vega = S·φ(d₁)·√T × 0.01
    ///
    /// Identical for calls and puts; always non-negative.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let per_pp = T::from(PER_PERCENTAGE_POINT).unwrap();
        let d1 = self.d1(strike, expiry);

        self.spot * norm_pdf(d1) * expiry.sqrt() * per_pp
    }

    /// Computes Theta per calendar day.
    ///
    /// - Call: [-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
    /// - Put:  [-(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)] / 365
    ///
    /// The division by 365 quotes decay per calendar day (not per trading
    /// day, not per year).
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        let two = T::from(2.0).unwrap();
        let days_per_year = T::from(DAYS_PER_YEAR).unwrap();

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        let decay = -(self.spot * norm_pdf(d1) * self.volatility) / (two * sqrt_t);

        let annual = match kind {
            OptionKind::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            OptionKind::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        };

        annual / days_per_year
    }

    /// Computes Rho per 1 percentage point of rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂) × 0.01
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂) × 0.01
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, kind: OptionKind) -> T {
        let per_pp = T::from(PER_PERCENTAGE_POINT).unwrap();

        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * expiry * (-self.rate * expiry).exp();

        match kind {
            OptionKind::Call => discounted_strike * norm_cdf(d2) * per_pp,
            OptionKind::Put => -discounted_strike * norm_cdf(-d2) * per_pp,
        }
    }

    /// Computes all five Greeks in one call.
    ///
    /// # Examples
    /// ```
    /// use optrisk_models::analytical::BlackScholes;
    /// use optrisk_models::instruments::OptionKind;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let greeks = bs.greeks(100.0, 1.0, OptionKind::Call);
    ///
    /// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    /// assert!(greeks.gamma >= 0.0);
    /// assert!(greeks.vega >= 0.0);
    /// ```
    pub fn greeks(&self, strike: T, expiry: T, kind: OptionKind) -> Greeks<T> {
        Greeks {
            delta: self.delta(strike, expiry, kind),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, kind),
            rho: self.rho(strike, expiry, kind),
        }
    }
}
