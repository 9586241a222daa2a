use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use strum::VariantArray;
use thiserror::Error;
use tracing::trace;

use crate::battery_life::{milliamp_hours_to_milliamp_seconds, BatteryLife, DurationError};
use crate::part::{Battery, CellularModule, CircuitBoard, Component, ExternalShell, Part, PartKind, Screen, Speakers};
use crate::report::{Brochure, PartsReport};

/// Markup applied to a cost to arrive at a recommended retail price.
pub const MARKUP: Decimal = dec!(2.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DrawMode {
    /// Standby
    Passive,
    /// In use, e.g. talking
    Active,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Missing part. kind: {0}")]
    MissingPart(PartKind),
    #[error("Missing attribute. name: {0}")]
    MissingAttribute(&'static str),
    #[error("No {0} power draw, battery duration is undefined")]
    NoPowerDraw(DrawMode),
    #[error("Arithmetic overflow. calculation: {0}")]
    Overflow(&'static str),
    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// A phone, made up of at most one part of each kind.
///
/// Every derived value (prices, battery durations, brochure, report) is computed from the parts present at
/// the time of the call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phone {
    manufacturer: Option<String>,
    model: Option<String>,
    parts: BTreeMap<PartKind, Part>,
}

impl Phone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = Some(manufacturer.into());
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = Some(model.into());
    }

    /// Puts the part in the slot for its kind, returning the part it replaced, if any.
    pub fn set_part(&mut self, part: impl Into<Part>) -> Option<Part> {
        let part = part.into();
        let kind = part.kind();
        trace!("Setting part. kind: {}", kind);

        self.parts.insert(kind, part)
    }

    pub fn part(&self, kind: PartKind) -> Option<&Part> {
        self.parts.get(&kind)
    }

    /// Removing a part that is not set is not an error.
    pub fn clear_part(&mut self, kind: PartKind) -> Option<Part> {
        trace!("Clearing part. kind: {}", kind);
        self.parts.remove(&kind)
    }

    /// The parts that are set, in kind order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn circuit_board(&self) -> Option<&CircuitBoard> {
        match self.part(PartKind::CircuitBoard) {
            Some(Part::CircuitBoard(part)) => Some(part),
            _ => None,
        }
    }

    pub fn cellular_module(&self) -> Option<&CellularModule> {
        match self.part(PartKind::CellularModule) {
            Some(Part::CellularModule(part)) => Some(part),
            _ => None,
        }
    }

    pub fn battery(&self) -> Option<&Battery> {
        match self.part(PartKind::Battery) {
            Some(Part::Battery(part)) => Some(part),
            _ => None,
        }
    }

    pub fn speakers(&self) -> Option<&Speakers> {
        match self.part(PartKind::Speakers) {
            Some(Part::Speakers(part)) => Some(part),
            _ => None,
        }
    }

    pub fn screen(&self) -> Option<&Screen> {
        match self.part(PartKind::Screen) {
            Some(Part::Screen(part)) => Some(part),
            _ => None,
        }
    }

    pub fn external_shell(&self) -> Option<&ExternalShell> {
        match self.part(PartKind::ExternalShell) {
            Some(Part::ExternalShell(part)) => Some(part),
            _ => None,
        }
    }

    /// Sum of the prices of the parts, parts without a price count as zero.
    pub fn total_price(&self) -> Result<Decimal, PhoneError> {
        checked_sum(
            self.parts()
                .filter_map(|part| part.price()),
        )
        .ok_or(PhoneError::Overflow("total price"))
    }

    /// The total price plus the cost of assembling the phone into its external shell.
    pub fn assembled_price(&self) -> Result<Decimal, PhoneError> {
        let assembly_cost = self
            .external_shell()
            .and_then(|shell| shell.assembly_cost)
            .unwrap_or_default();

        self.total_price()?
            .checked_add(assembly_cost)
            .ok_or(PhoneError::Overflow("assembled price"))
    }

    pub fn recommended_price(cost: Decimal) -> Result<Decimal, PhoneError> {
        cost.checked_mul(MARKUP)
            .ok_or(PhoneError::Overflow("recommended price"))
    }

    /// Sum of the current draw, in mA, of the parts that consume power.
    pub fn total_draw(&self, mode: DrawMode) -> Result<Decimal, PhoneError> {
        checked_sum(
            self.parts()
                .filter(|part| part.kind().is_power_consumer())
                .filter_map(|part| match mode {
                    DrawMode::Passive => part.passive_draw(),
                    DrawMode::Active => part.active_draw(),
                }),
        )
        .ok_or(PhoneError::Overflow("total draw"))
    }

    /// Estimated standby time.
    pub fn passive_battery_duration(&self) -> Result<BatteryLife, PhoneError> {
        self.battery_duration(DrawMode::Passive)
    }

    /// Estimated talk time.
    pub fn active_battery_duration(&self) -> Result<BatteryLife, PhoneError> {
        self.battery_duration(DrawMode::Active)
    }

    /// Fails with [`PhoneError::NoPowerDraw`] when nothing draws current in the given mode.
    pub fn battery_duration(&self, mode: DrawMode) -> Result<BatteryLife, PhoneError> {
        let battery = self
            .battery()
            .ok_or(PhoneError::MissingPart(PartKind::Battery))?;

        let total_draw = self.total_draw(mode)?;
        if total_draw.is_zero() {
            return Err(PhoneError::NoPowerDraw(mode));
        }

        let capacity = milliamp_hours_to_milliamp_seconds(battery.storage_capacity)
            .ok_or(PhoneError::Overflow("battery capacity"))?;
        let seconds = capacity
            .checked_div(total_draw)
            .ok_or(PhoneError::Overflow("battery duration"))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        trace!(
            "Battery duration. mode: {}, capacity: {} mAs, draw: {} mA, seconds: {}",
            mode,
            capacity,
            total_draw,
            seconds
        );

        Ok(BatteryLife::try_from_seconds(seconds)?)
    }

    /// A summary of the phone for customers.
    ///
    /// Every part, the manufacturer and the model must be set.
    pub fn brochure(&self) -> Result<String, PhoneError> {
        Brochure::try_new(self).map(|brochure| brochure.to_string())
    }

    /// A detailed listing of every part followed by the pricing.
    ///
    /// Every part, the manufacturer and the model must be set.
    pub fn report(&self) -> Result<String, PhoneError> {
        PartsReport::try_new(self).map(|report| report.to_string())
    }

    /// The kinds of part that are not set, in kind order.
    pub fn missing_parts(&self) -> Vec<PartKind> {
        PartKind::VARIANTS
            .iter()
            .filter(|kind| !self.parts.contains_key(*kind))
            .copied()
            .collect()
    }
}

/// `None` on overflow.
fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
}
