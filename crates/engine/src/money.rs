use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::EngineError;

/// Fraction digits kept by every converted amount.
const MONEY_SCALE: u32 = 2;

/// Most digits accepted from user input. Anything longer would not survive
/// the JSON store, which writes numbers as `f64`.
const MAX_INPUT_DIGITS: usize = 15;

/// Money amount of an operation, backed by an exact decimal.
///
/// The core does not enforce a sign: incomes, expenses and investments are
/// all recorded as magnitudes, and the kind label tells them apart.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(Decimal::new(1234, 2));
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap().to_string(), "10.00");
/// assert_eq!("10,5".parse::<Amount>().unwrap().to_string(), "10.50");
/// assert!("12.345".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new amount from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the raw decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the amount is strictly greater than 0.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Re-expresses the amount at `rate`, rounded to 2 decimal places.
    ///
    /// Rounding is half-to-even (banker's rounding): `0.125` becomes `0.12`
    /// and `0.135` becomes `0.14`. A product past the decimal range saturates
    /// at [`Decimal::MAX`] or [`Decimal::MIN`].
    #[must_use]
    pub fn convert(self, rate: Rate) -> Amount {
        let raw = self.0.saturating_mul(rate.value());
        Amount(raw.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
        match f.width() {
            Some(width) => write!(f, "{:>width$}", format!("{rounded:.2}")),
            None => write!(f, "{rounded:.2}"),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl Add for Amount {
    type Output = Amount;

    /// Saturates at the decimal range instead of overflowing.
    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl FromStr for Amount {
    type Err = EngineError;

    /// Parses a decimal string into an amount.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - max 15 digits in total
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_decimal(s).map_err(EngineError::InvalidAmount)?;
        if value.scale() > MONEY_SCALE {
            return Err(EngineError::InvalidAmount("too many decimals".to_string()));
        }
        Ok(Amount(value))
    }
}

/// Conversion rate applied by a [`CurrencyView`](crate::CurrencyView).
///
/// Rates are user supplied and never validated: a zero or negative rate is
/// accepted and simply produces a meaningless converted amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub const ONE: Rate = Rate(Decimal::ONE);

    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Rate {
    type Err = EngineError;

    /// Same syntax as [`Amount`], without the limit on fractional digits
    /// (`0.027` is a typical rate).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Rate).map_err(EngineError::InvalidRate)
    }
}

/// Shared grammar for amounts and rates: `[+-]digits[(.|,)digits]`.
fn parse_decimal(s: &str) -> Result<Decimal, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }

    let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped)
    } else if let Some(stripped) = trimmed.strip_prefix('+') {
        (false, stripped)
    } else {
        (false, trimmed)
    };

    let rest = rest.trim();
    if rest.is_empty() {
        return Err("empty value".to_string());
    }

    let rest = rest.replace(',', ".");
    let mut parts = rest.split('.');
    let int_part = parts.next().unwrap_or_default();
    let frac_part = parts.next();
    if parts.next().is_some() {
        return Err(format!("invalid number: {trimmed}"));
    }

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid number: {trimmed}"));
    }
    if let Some(frac) = frac_part
        && !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(format!("invalid number: {trimmed}"));
    }

    let digits = int_part.trim_start_matches('0').len() + frac_part.map_or(0, str::len);
    if digits > MAX_INPUT_DIGITS {
        return Err(format!("number too large: {trimmed}"));
    }

    let normalized = match frac_part {
        None | Some("") => int_part.to_string(),
        Some(frac) => format!("{int_part}.{frac}"),
    };
    let value =
        Decimal::from_str(&normalized).map_err(|_| format!("invalid number: {trimmed}"))?;

    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Amount::new(dec!(0)).to_string(), "0.00");
        assert_eq!(Amount::new(dec!(0.1)).to_string(), "0.10");
        assert_eq!(Amount::new(dec!(10.5)).to_string(), "10.50");
        assert_eq!(Amount::new(dec!(-10.5)).to_string(), "-10.50");
        assert_eq!(format!("{:8}", Amount::new(dec!(40))), "   40.00");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Amount>().unwrap().value(), dec!(10));
        assert_eq!("10.5".parse::<Amount>().unwrap().value(), dec!(10.5));
        assert_eq!("10,50".parse::<Amount>().unwrap().value(), dec!(10.50));
        assert_eq!("-0.01".parse::<Amount>().unwrap().value(), dec!(-0.01));
        assert_eq!("+1.00".parse::<Amount>().unwrap().value(), dec!(1));
        assert_eq!("  2.30 ".parse::<Amount>().unwrap().value(), dec!(2.3));
        assert_eq!("7.".parse::<Amount>().unwrap().value(), dec!(7));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Amount>().is_err());
        assert!("-".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!(".5".parse::<Amount>().is_err());
        assert!("1e3".parse::<Amount>().is_err());
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert_eq!(
            "12.345".parse::<Amount>(),
            Err(EngineError::InvalidAmount("too many decimals".to_string()))
        );
        assert!("0.001".parse::<Amount>().is_err());
    }

    #[test]
    fn rate_accepts_long_fractions() {
        assert_eq!("0.027".parse::<Rate>().unwrap().value(), dec!(0.027));
        assert_eq!("0,5".parse::<Rate>().unwrap().value(), dec!(0.5));
        assert!(matches!(
            "x".parse::<Rate>(),
            Err(EngineError::InvalidRate(_))
        ));
    }

    #[test]
    fn convert_rounds_half_to_even() {
        let rate = Rate::new(dec!(0.5));
        assert_eq!(Amount::new(dec!(0.25)).convert(rate).value(), dec!(0.12));
        assert_eq!(Amount::new(dec!(0.27)).convert(rate).value(), dec!(0.14));
        assert_eq!(
            Amount::new(dec!(100)).convert(Rate::new(dec!(0.027))).value(),
            dec!(2.70)
        );
    }

    #[test]
    fn parse_rejects_more_than_fifteen_digits() {
        assert_eq!(
            "9999999999999.99".parse::<Amount>().unwrap().value(),
            dec!(9999999999999.99)
        );
        assert_eq!(
            "79228162514264337593543950335".parse::<Amount>(),
            Err(EngineError::InvalidAmount(
                "number too large: 79228162514264337593543950335".to_string()
            ))
        );
        assert!("12345678901234567.89".parse::<Amount>().is_err());
        assert!("0.0000000000000001".parse::<Rate>().is_err());
        assert_eq!("000000000000000001".parse::<Rate>().unwrap(), Rate::ONE);
    }

    #[test]
    fn convert_saturates_instead_of_overflowing() {
        let max = Amount::new(Decimal::MAX);
        assert_eq!(max.convert(Rate::new(dec!(2))).value(), Decimal::MAX);
        assert_eq!(max.convert(Rate::new(dec!(-2))).value(), Decimal::MIN);
    }

    #[test]
    fn sum_saturates_instead_of_overflowing() {
        let total: Amount = [Decimal::MAX, Decimal::MAX, dec!(1)]
            .into_iter()
            .map(Amount::new)
            .sum();
        assert_eq!(total.value(), Decimal::MAX);

        let mut running = Amount::new(Decimal::MIN);
        running += Amount::new(dec!(-1));
        assert_eq!(running.value(), Decimal::MIN);
    }

    #[test]
    fn rate_display_is_normalized() {
        assert_eq!(Rate::new(dec!(0.0270)).to_string(), "0.027");
        assert_eq!(Rate::ONE.to_string(), "1");
    }

    #[test]
    fn sum_adds_every_amount() {
        let total: Amount = [dec!(1.10), dec!(2.20), dec!(3.30)]
            .into_iter()
            .map(Amount::new)
            .sum();
        assert_eq!(total.value(), dec!(6.60));
    }
}
