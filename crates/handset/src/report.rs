//! Fixed-format text renderings of a fully assembled phone.

use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::battery_life::BatteryLife;
use crate::display::{Money, QuotedList};
use crate::part::{Battery, CellularModule, CircuitBoard, ExternalShell, Part, PartKind, Screen, Speakers};
use crate::phone::{Phone, PhoneError};

const SEPARATOR_WIDTH: usize = 80;

/// The customer-facing summary of a phone.
#[derive(Debug)]
pub struct Brochure<'a> {
    manufacturer: &'a str,
    model: &'a str,
    circuit_board: &'a CircuitBoard,
    cellular_module: &'a CellularModule,
    battery: &'a Battery,
    speakers: &'a Speakers,
    screen: &'a Screen,
    external_shell: &'a ExternalShell,
    standby_time: BatteryLife,
    talk_time: BatteryLife,
    msrp: Decimal,
}

impl<'a> Brochure<'a> {
    pub fn try_new(phone: &'a Phone) -> Result<Self, PhoneError> {
        Ok(Self {
            manufacturer: require_manufacturer(phone)?,
            model: require_model(phone)?,
            circuit_board: require(phone.circuit_board(), PartKind::CircuitBoard)?,
            cellular_module: require(phone.cellular_module(), PartKind::CellularModule)?,
            battery: require(phone.battery(), PartKind::Battery)?,
            speakers: require(phone.speakers(), PartKind::Speakers)?,
            screen: require(phone.screen(), PartKind::Screen)?,
            external_shell: require(phone.external_shell(), PartKind::ExternalShell)?,
            standby_time: phone.passive_battery_duration()?,
            talk_time: phone.active_battery_duration()?,
            msrp: Phone::recommended_price(phone.total_price()?)?,
        })
    }
}

impl Display for Brochure<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(f, "Manufacturer: {}; Model: {}", self.manufacturer, self.model)?;
        writeln!(
            f,
            "Primary board design: {} v{}",
            self.circuit_board.model, self.circuit_board.revision
        )?;
        writeln!(f, "Supported cellular bands: {}", QuotedList(&self.cellular_module.bands))?;
        writeln!(f, "Battery: Capacity: {} mAH;", self.battery.storage_capacity)?;
        writeln!(
            f,
            "\tEstimated standby time: {} days, hours, minutes, seconds;",
            self.standby_time
        )?;
        writeln!(f, "\tEstimated talk time: {} days, hours, minutes, seconds;", self.talk_time)?;
        writeln!(f, "Speakers response frequency: {}", self.speakers.response_frequency)?;
        writeln!(
            f,
            "Screen resolution: {}x{} @ {} hz",
            self.screen.width_pixels, self.screen.height_pixels, self.screen.refresh_rate
        )?;
        writeln!(
            f,
            "External Dimensions: Height {} mm, Width {} mm, Depth {} mm.",
            self.external_shell.height, self.external_shell.width, self.external_shell.depth
        )?;
        writeln!(f, "MSRP: ${};", Money(self.msrp))
    }
}

/// Every part of a phone, followed by its pricing.
#[derive(Debug)]
pub struct PartsReport<'a> {
    manufacturer: &'a str,
    model: &'a str,
    parts: Vec<&'a Part>,
    total_price: Decimal,
    assembled_price: Decimal,
    msrp: Decimal,
}

impl<'a> PartsReport<'a> {
    pub fn try_new(phone: &'a Phone) -> Result<Self, PhoneError> {
        let manufacturer = require_manufacturer(phone)?;
        let model = require_model(phone)?;

        if let Some(kind) = phone
            .missing_parts()
            .first()
        {
            return Err(PhoneError::MissingPart(*kind));
        }

        let total_price = phone.total_price()?;

        Ok(Self {
            manufacturer,
            model,
            parts: phone.parts().collect(),
            total_price,
            assembled_price: phone.assembled_price()?,
            msrp: Phone::recommended_price(total_price)?,
        })
    }
}

impl Display for PartsReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Manufacturer: {}; Model: {};", self.manufacturer, self.model)?;
        for part in self.parts.iter() {
            write!(f, "{}", part)?;
        }
        writeln!(f, "Price of Parts: ${} USD;", Money(self.total_price))?;
        writeln!(f, "Assembled Price: ${} USD;", Money(self.assembled_price))?;
        writeln!(f, "Recommended MSRP: ${} USD;", Money(self.msrp))
    }
}

fn require_manufacturer(phone: &Phone) -> Result<&str, PhoneError> {
    phone
        .manufacturer()
        .ok_or(PhoneError::MissingAttribute("manufacturer"))
}

fn require_model(phone: &Phone) -> Result<&str, PhoneError> {
    phone
        .model()
        .ok_or(PhoneError::MissingAttribute("model"))
}

fn require<T>(part: Option<&T>, kind: PartKind) -> Result<&T, PhoneError> {
    part.ok_or(PhoneError::MissingPart(kind))
}
