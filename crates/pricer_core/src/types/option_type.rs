//! Option type discriminator.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// European option payoff type.
///
/// A straddle is a call and a put on the same strike held together.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(OptionType::try_from('s').unwrap(), OptionType::Straddle);
/// assert!("butterfly".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
    /// Call plus put on the same strike.
    Straddle,
}

impl OptionType {
    /// All option types, in discriminator order.
    pub const ALL: [OptionType; 3] = [OptionType::Call, OptionType::Put, OptionType::Straddle];

    /// Single-character discriminator (`c`, `p`, `s`).
    #[inline]
    pub fn as_char(&self) -> char {
        match self {
            OptionType::Call => 'c',
            OptionType::Put => 'p',
            OptionType::Straddle => 's',
        }
    }

    /// Payoff of the option given the (discounted) forward value `S' - K'`.
    ///
    /// - Call: `max(0, F)`
    /// - Put: `max(0, -F)`
    /// - Straddle: `|F|`
    #[inline]
    pub fn payoff(&self, forward: f64) -> f64 {
        match self {
            OptionType::Call => forward.max(0.0),
            OptionType::Put => (-forward).max(0.0),
            OptionType::Straddle => forward.abs(),
        }
    }

    /// Number of put legs (0 or 1).
    ///
    /// A zero-spot option is worth `put_weight · K·e^(-rτ)`.
    #[inline]
    pub fn put_weight(&self) -> f64 {
        match self {
            OptionType::Call => 0.0,
            OptionType::Put | OptionType::Straddle => 1.0,
        }
    }

    /// Number of call legs (0 or 1).
    ///
    /// A zero-strike option is worth `call_weight · S·e^(-qτ)`.
    #[inline]
    pub fn call_weight(&self) -> f64 {
        match self {
            OptionType::Put => 0.0,
            OptionType::Call | OptionType::Straddle => 1.0,
        }
    }
}

impl TryFrom<char> for OptionType {
    type Error = PricingError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(OptionType::Call),
            'p' => Ok(OptionType::Put),
            's' => Ok(OptionType::Straddle),
            _ => Err(PricingError::InvalidOptionType(c.to_string())),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            "s" | "straddle" => Ok(OptionType::Straddle),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
            OptionType::Straddle => write!(f, "straddle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_letters() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("P".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" Straddle ".parse::<OptionType>().unwrap(), OptionType::Straddle);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = " ".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, PricingError::InvalidOptionType(_)));
        assert!(OptionType::try_from('x').is_err());
        assert!(OptionType::try_from(' ').is_err());
    }

    #[test]
    fn test_char_round_trip() {
        for option_type in OptionType::ALL {
            assert_eq!(OptionType::try_from(option_type.as_char()).unwrap(), option_type);
            assert_eq!(
                option_type.to_string().parse::<OptionType>().unwrap(),
                option_type
            );
        }
    }

    #[test]
    fn test_payoff() {
        assert_eq!(OptionType::Call.payoff(5.0), 5.0);
        assert_eq!(OptionType::Call.payoff(-5.0), 0.0);
        assert_eq!(OptionType::Put.payoff(5.0), 0.0);
        assert_eq!(OptionType::Put.payoff(-5.0), 5.0);
        assert_eq!(OptionType::Straddle.payoff(-5.0), 5.0);
        assert_eq!(OptionType::Straddle.payoff(5.0), 5.0);
    }

    #[test]
    fn test_straddle_weights_sum_legs() {
        assert_eq!(
            OptionType::Straddle.put_weight(),
            OptionType::Call.put_weight() + OptionType::Put.put_weight()
        );
        assert_eq!(
            OptionType::Straddle.call_weight(),
            OptionType::Call.call_weight() + OptionType::Put.call_weight()
        );
    }
}
