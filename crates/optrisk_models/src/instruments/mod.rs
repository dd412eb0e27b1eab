//! Option instrument definitions.

use num_traits::Float;

/// Kind of vanilla option payoff.
///
/// A two-variant sum type replacing stringly-typed `"call"`/`"put"`
/// dispatch; an unrecognised kind is unrepresentable.
///
/// # Examples
/// ```
/// use optrisk_models::instruments::OptionKind;
///
/// let call = OptionKind::Call;
/// let payoff = call.intrinsic(110.0_f64, 100.0);
/// assert_eq!(payoff, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Call option: right to buy at the strike
    Call,
    /// Put option: right to sell at the strike
    Put,
}

impl OptionKind {
    /// Returns true for `OptionKind::Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Intrinsic value of the option at a given spot.
    ///
    /// Call: max(S − K, 0). Put: max(K − S, 0).
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionKind::Call => (spot - strike).max(zero),
            OptionKind::Put => (strike - spot).max(zero),
        }
    }
}
