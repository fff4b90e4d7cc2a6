use crate::utils::error::{CartError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;
use std::sync::OnceLock;

/// An amount of money held as whole cents.
///
/// Cost strings such as `"$10"` or `"$4.50"` are parsed once, at the boundary
/// where they enter the program; all pricing arithmetic is integral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

fn cost_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\$?(?P<whole>[0-9]+)(?:\.(?P<frac>[0-9]*))?$").expect("cost pattern is valid")
    })
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Money(dollars.saturating_mul(100))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Parses `"$" + decimal`. Digits past the second decimal place are
    /// rounded half-up into cents.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason: &str| CartError::InvalidCost {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("cost cannot be empty"));
        }

        let caps = cost_pattern()
            .captures(trimmed)
            .ok_or_else(|| invalid("expected \"$\" followed by a decimal number"))?;

        let whole: u64 = caps["whole"]
            .parse()
            .map_err(|_| invalid("amount is too large"))?;

        let frac = caps.name("frac").map(|m| m.as_str()).unwrap_or("");
        let digits: Vec<u64> = frac.bytes().map(|b| u64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|&d| d >= 5);

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }

    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self> {
        Money::parse(s)
    }
}

impl TryFrom<String> for Money {
    type Error = CartError;

    fn try_from(value: String) -> Result<Self> {
        Money::parse(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        format!("${}", money)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!(Money::parse("$10").unwrap(), Money::from_cents(1000));
        assert_eq!(Money::parse("15").unwrap(), Money::from_cents(1500));
        assert_eq!(Money::parse(" $0 ").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(Money::parse("$4.5").unwrap().cents(), 450);
        assert_eq!(Money::parse("$4.05").unwrap().cents(), 405);
        assert_eq!(Money::parse("$4.").unwrap().cents(), 400);
        assert_eq!(Money::parse("$1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("$1.994").unwrap().cents(), 199);
        assert_eq!(Money::parse("$0.999").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "$", "$-3", "ten", "$1,000", "$.50", "$$5", "€5"] {
            assert!(
                matches!(Money::parse(bad), Err(CartError::InvalidCost { .. })),
                "{bad:?} should not parse"
            );
        }
        assert!(Money::parse("$99999999999999999999").is_err());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_cents(2000).to_string(), "20.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(String::from(Money::from_cents(1050)), "$10.50");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Money::from_dollars(10).times(3), Money::from_cents(3000));
        assert_eq!(Money::from_cents(u64::MAX).times(2), Money::from_cents(u64::MAX));

        let total: Money = [Money::from_dollars(10), Money::from_dollars(15)].into_iter().sum();
        assert_eq!(total.to_string(), "25.00");
    }

    #[test]
    fn test_serde_uses_cost_strings() {
        let json = serde_json::to_string(&Money::from_cents(1500)).unwrap();
        assert_eq!(json, "\"$15.00\"");

        let parsed: Money = serde_json::from_str("\"$7.25\"").unwrap();
        assert_eq!(parsed.cents(), 725);
        assert!(serde_json::from_str::<Money>("\"seven\"").is_err());
    }
}
