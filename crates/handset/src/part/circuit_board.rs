use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::display::{Maybe, MaybeMoney};
use crate::part::Component;

/// The primary board of a phone, identified by model and revision.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CircuitBoard {
    pub model: String,
    pub revision: String,
    pub active_draw: Option<Decimal>,
    pub passive_draw: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl CircuitBoard {
    pub fn new(model: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            revision: revision.into(),
            active_draw: None,
            passive_draw: None,
            price: None,
        }
    }

    pub fn with_power_draw(mut self, active_draw: Decimal, passive_draw: Decimal) -> Self {
        self.active_draw = Some(active_draw);
        self.passive_draw = Some(passive_draw);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

impl Component for CircuitBoard {
    fn price(&self) -> Option<Decimal> {
        self.price
    }

    fn active_draw(&self) -> Option<Decimal> {
        self.active_draw
    }

    fn passive_draw(&self) -> Option<Decimal> {
        self.passive_draw
    }
}

impl Display for CircuitBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Circuit Board:")?;
        writeln!(f, "\tModel: {} v{}", self.model, self.revision)?;
        writeln!(f, "\tPower Consumption:")?;
        writeln!(
            f,
            "\t\tMax: {} mA; Min {} mA;",
            Maybe(&self.active_draw),
            Maybe(&self.passive_draw)
        )?;
        writeln!(f, "\tPrice: ${} USD", MaybeMoney(self.price))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn display() {
        // given
        let board = CircuitBoard::new("MRL-0032", "1.3.7a")
            .with_power_draw(dec!(0.127), dec!(0.018))
            .with_price(dec!(98.79));

        // and
        let expected = concat!(
            "Circuit Board:\n",
            "\tModel: MRL-0032 v1.3.7a\n",
            "\tPower Consumption:\n",
            "\t\tMax: 0.127 mA; Min 0.018 mA;\n",
            "\tPrice: $98.79 USD\n",
        );

        // expect
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn display_without_optional_values() {
        // given
        let board = CircuitBoard::new("Cobalt", "2.0.4");

        // expect
        assert!(board
            .to_string()
            .contains("\t\tMax: n/a mA; Min n/a mA;\n\tPrice: $n/a USD\n"));
    }
}
