use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::display::{Maybe, MaybeMoney};
use crate::part::Component;

#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Speakers {
    pub brand: String,
    /// e.g. '35 - 21 kHz'
    pub response_frequency: String,
    /// in ohms
    pub impedance: Decimal,
    pub active_draw: Option<Decimal>,
    pub passive_draw: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl Speakers {
    pub fn new(brand: impl Into<String>, response_frequency: impl Into<String>, impedance: Decimal) -> Self {
        Self {
            brand: brand.into(),
            response_frequency: response_frequency.into(),
            impedance,
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

impl Component for Speakers {
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

impl Display for Speakers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Speakers:")?;
        writeln!(f, "\tBrand: {}", self.brand)?;
        writeln!(f, "\tResponse Frequency: {}", self.response_frequency)?;
        writeln!(f, "\tElectrical Specs:")?;
        writeln!(f, "\t\tImpedance: {}", self.impedance)?;
        writeln!(
            f,
            "\t\tMax Current Draw: {} mA; Min Current Draw: {} mA",
            Maybe(&self.active_draw),
            Maybe(&self.passive_draw)
        )?;
        writeln!(f, "\tPrice: ${} USD", MaybeMoney(self.price))
    }
}
