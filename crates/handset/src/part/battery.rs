use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::display::{Maybe, MaybeMoney};
use crate::part::Component;

/// The power source of a phone. A battery never draws current itself.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Battery {
    pub form_factor: String,
    pub battery_type: String,
    /// in mAh
    pub storage_capacity: Decimal,
    /// Average number of charging cycles
    pub charge_cycles: Option<u32>,
    pub price: Option<Decimal>,
}

impl Battery {
    pub fn new(form_factor: impl Into<String>, battery_type: impl Into<String>, storage_capacity: Decimal) -> Self {
        Self {
            form_factor: form_factor.into(),
            battery_type: battery_type.into(),
            storage_capacity,
            charge_cycles: None,
            price: None,
        }
    }

    pub fn with_charge_cycles(mut self, charge_cycles: u32) -> Self {
        self.charge_cycles = Some(charge_cycles);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

impl Component for Battery {
    fn price(&self) -> Option<Decimal> {
        self.price
    }
}

impl Display for Battery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Battery:")?;
        writeln!(f, "\tForm factor: {}", self.form_factor)?;
        writeln!(f, "\tBattery type: {}", self.battery_type)?;
        writeln!(
            f,
            "\tStorage Capacity: {} mAh; Average Charging Cycles: {};",
            self.storage_capacity,
            Maybe(&self.charge_cycles)
        )?;
        writeln!(f, "\tPrice: ${} USD;", MaybeMoney(self.price))
    }
}
