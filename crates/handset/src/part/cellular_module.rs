use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::display::{Maybe, MaybeMoney, QuotedList};
use crate::part::Component;

#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CellularModule {
    pub manufacturer: String,
    pub make: String,
    /// Supported cellular protocols, e.g. '3G', 'LTE'
    pub bands: Vec<String>,
    pub active_draw: Option<Decimal>,
    pub passive_draw: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl CellularModule {
    pub fn new(manufacturer: impl Into<String>, make: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            make: make.into(),
            bands: vec![],
            active_draw: None,
            passive_draw: None,
            price: None,
        }
    }

    pub fn with_bands<I, S>(mut self, bands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bands = bands
            .into_iter()
            .map(Into::into)
            .collect();
        self
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

impl Component for CellularModule {
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

impl Display for CellularModule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cellular Module:")?;
        writeln!(f, "\tManufacturer: {}; Make: {};", self.manufacturer, self.make)?;
        writeln!(f, "\tSupported Cellular Protocols: {}", QuotedList(&self.bands))?;
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
