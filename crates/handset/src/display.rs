//! Value formatting shared by the part blocks, brochure and report.

use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

const ABSENT: &str = "n/a";

/// Renders an optional value, or `n/a` when absent.
pub struct Maybe<'a, T>(pub &'a Option<T>);

impl<T: Display> Display for Maybe<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(ABSENT),
        }
    }
}

/// Renders an amount of money with two decimal places, rounding half to even.
pub struct Money(pub Decimal);

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

/// Like [`Money`] but for prices that may not have been set.
pub struct MaybeMoney(pub Option<Decimal>);

impl Display for MaybeMoney {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", Money(value)),
            None => f.write_str(ABSENT),
        }
    }
}

/// Renders a flag as `True` or `False`.
pub struct Flag(pub bool);

impl Display for Flag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            true => f.write_str("True"),
            false => f.write_str("False"),
        }
    }
}

/// Renders a list of strings as `['a', 'b']`.
pub struct QuotedList<'a>(pub &'a [String]);

impl Display for QuotedList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let quoted: Vec<String> = self
            .0
            .iter()
            .map(|item| format!("'{}'", item))
            .collect();

        write!(f, "[{}]", quoted.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(dec!(5), "5.00")]
    #[case(dec!(5.00), "5.00")]
    #[case(dec!(98.79), "98.79")]
    #[case(dec!(557.125), "557.12")]
    #[case(dec!(557.135), "557.14")]
    #[case(dec!(0), "0.00")]
    fn money(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(Money(value).to_string(), expected);
    }

    #[test]
    fn absent_values() {
        assert_eq!(Maybe::<Decimal>(&None).to_string(), "n/a");
        assert_eq!(MaybeMoney(None).to_string(), "n/a");
    }

    #[test]
    fn present_values_keep_their_scale() {
        assert_eq!(Maybe(&Some(dec!(154.0))).to_string(), "154.0");
        assert_eq!(Maybe(&Some(dec!(8))).to_string(), "8");
    }

    #[test]
    fn quoted_list() {
        let bands = vec!["3G".to_string(), "4G".to_string(), "LTE".to_string()];
        assert_eq!(QuotedList(&bands).to_string(), "['3G', '4G', 'LTE']");
        assert_eq!(QuotedList(&[]).to_string(), "[]");
    }

    #[test]
    fn flag() {
        assert_eq!(Flag(true).to_string(), "True");
        assert_eq!(Flag(false).to_string(), "False");
    }
}
