use crate::Result;

use std::fmt;

use thiserror::Error;

/// Number of sub-units in one whole unit (four decimal places)
const SCALE: i64 = 10_000;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Overflow error while applying rate {1} to {0}")]
    RateOverflow(Money, Rate),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point amount stored as ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_whole(units: i64) -> Self {
        return Self(units * SCALE);
    }

    pub fn parse(string: &str) -> Result<Self> {
        let value = parse_scaled(string)?;

        return Ok(Money(value));
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < 0;
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| MoneyError::Overflow("add", *self, *other))?;

        self.0 = sum;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or_else(|| MoneyError::Overflow("sub", *self, *other))?;

        self.0 = difference;

        return Ok(());
    }

    /// Returns `self * rate`, truncated to four decimal places
    pub fn apply_rate(&self, rate: &Rate) -> Result<Money> {
        let scaled = (self.0 as i128 * rate.0 as i128) / SCALE as i128;

        let value =
            i64::try_from(scaled).map_err(|_| MoneyError::RateOverflow(*self, *rate))?;

        return Ok(Money(value));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write_scaled(f, self.0);
    }
}

/// Fractional rate (0.02 == 2%) on the same scale as `Money`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(pub i64);

impl Rate {
    pub fn parse(string: &str) -> Result<Self> {
        let value = parse_scaled(string)?;

        if value < 0 {
            Err(MoneyError::Parse("Rate cannot be negative", string.to_string()))?
        }

        return Ok(Rate(value));
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write_scaled(f, self.0);
    }
}

fn parse_scaled(string: &str) -> Result<i64> {
    let trimmed = string.trim();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut parts = unsigned.split('.');

    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");

    if parts.next().is_some() {
        Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
    }

    if whole.is_empty() && fraction.is_empty() {
        Err(MoneyError::Parse("No digits found", string.to_string()))?
    }

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    if !all_digits(whole) || !all_digits(fraction) {
        Err(MoneyError::Parse("Unexpected character", string.to_string()))?
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };

    // anything past the fourth decimal place is truncated
    let fraction: i64 = format!("{:0<4}", fraction)[..4].parse()?;

    let value = whole
        .checked_mul(SCALE)
        .and_then(|value| value.checked_add(fraction))
        .ok_or_else(|| MoneyError::Parse("Amount too large", string.to_string()))?;

    return Ok(if negative { -value } else { value });
}

fn write_scaled(f: &mut fmt::Formatter, value: i64) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };

    let magnitude = value.unsigned_abs();
    let scale = SCALE as u64;

    let fraction = format!("{:04}", magnitude % scale);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    return write!(f, "{sign}{}.{fraction}", magnitude / scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("500").unwrap(), Money(5_000_000));
        assert_eq!(Money::parse("10.5").unwrap(), Money(105_000));
        assert_eq!(Money::parse(" 0.0001 ").unwrap(), Money(1));
        assert_eq!(Money::parse(".25").unwrap(), Money(2_500));
        assert_eq!(Money::parse("7.").unwrap(), Money(70_000));
        assert_eq!(Money::parse("-3").unwrap(), Money(-30_000));
        assert_eq!(Money::parse("-0.5").unwrap(), Money(-5_000));
        assert_eq!(Money::parse("+2").unwrap(), Money(20_000));

        // truncated past four decimals
        assert_eq!(Money::parse("1.23456").unwrap(), Money(12_345));
    }

    #[test]
    fn parse_errors() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("12e3").is_err());
        assert!(Money::parse("99999999999999999999").is_err());

        let err = Money::parse("1.2.3").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoneyError>(),
            Some(MoneyError::Parse("Too many decimal points", _))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_whole(300).to_string(), "300.0");
        assert_eq!(Money(105_000).to_string(), "10.5");
        assert_eq!(Money(1).to_string(), "0.0001");
        assert_eq!(Money::from_whole(-300).to_string(), "-300.0");
        assert_eq!(Money(-5_000).to_string(), "-0.5");
        assert_eq!(Money::ZERO.to_string(), "0.0");
        assert_eq!(Rate(200).to_string(), "0.02");
    }

    #[test]
    fn add_and_sub() {
        let mut money = Money::from_whole(10);

        money.add(&Money(5_000)).unwrap();
        assert_eq!(money, Money(105_000));

        money.sub(&Money::from_whole(20)).unwrap();
        assert_eq!(money, Money(-95_000));
        assert!(money.is_negative());
    }

    #[test]
    fn overflow_leaves_value_untouched() {
        let mut money = Money(i64::MAX);

        let err = money.add(&Money(1)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoneyError>(),
            Some(MoneyError::Overflow("add", _, _))
        ));
        assert_eq!(money, Money(i64::MAX));

        let mut money = Money(i64::MIN);
        assert!(money.sub(&Money(1)).is_err());
        assert_eq!(money, Money(i64::MIN));
    }

    #[test]
    fn apply_rate() {
        let rate = Rate::parse("0.02").unwrap();
        assert_eq!(rate, Rate(200));

        assert_eq!(
            Money::from_whole(300).apply_rate(&rate).unwrap(),
            Money::from_whole(6)
        );
        assert_eq!(Money(1).apply_rate(&rate).unwrap(), Money::ZERO);
        assert!(Money(i64::MAX).apply_rate(&Rate(20_000)).is_err());
    }

    #[test]
    fn negative_rate_rejected() {
        assert!(Rate::parse("-0.02").is_err());
        assert_eq!(Rate::parse("0").unwrap(), Rate(0));
    }
}
