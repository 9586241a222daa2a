use std::fmt::{Display, Formatter};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::display::{Maybe, MaybeMoney};
use crate::part::Component;

#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "ScreenRecord")]
pub struct Screen {
    pub height_mm: Decimal,
    pub width_mm: Decimal,
    pub pixels_per_mm: Decimal,
    /// Derived from the physical size and pixel density
    pub height_pixels: u32,
    /// Derived from the physical size and pixel density
    pub width_pixels: u32,
    /// in hz
    pub refresh_rate: u32,
    pub active_draw: Option<Decimal>,
    pub passive_draw: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl Screen {
    pub fn new(height_mm: Decimal, width_mm: Decimal, pixels_per_mm: Decimal, refresh_rate: u32) -> Self {
        Self {
            height_mm,
            width_mm,
            pixels_per_mm,
            height_pixels: pixel_count(height_mm, pixels_per_mm),
            width_pixels: pixel_count(width_mm, pixels_per_mm),
            refresh_rate,
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

/// The stored form of a screen, pixel counts are always recalculated on load.
#[derive(serde::Deserialize)]
struct ScreenRecord {
    height_mm: Decimal,
    width_mm: Decimal,
    pixels_per_mm: Decimal,
    refresh_rate: u32,
    active_draw: Option<Decimal>,
    passive_draw: Option<Decimal>,
    price: Option<Decimal>,
}

impl From<ScreenRecord> for Screen {
    fn from(record: ScreenRecord) -> Self {
        Self {
            active_draw: record.active_draw,
            passive_draw: record.passive_draw,
            price: record.price,
            ..Screen::new(record.height_mm, record.width_mm, record.pixels_per_mm, record.refresh_rate)
        }
    }
}

/// Rounds half to even, negative or oversized results saturate.
fn pixel_count(length_mm: Decimal, pixels_per_mm: Decimal) -> u32 {
    let Some(pixels) = length_mm.checked_mul(pixels_per_mm) else {
        return match length_mm.is_sign_negative() == pixels_per_mm.is_sign_negative() {
            true => u32::MAX,
            false => 0,
        };
    };
    let pixels = pixels.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

    if pixels.is_sign_negative() {
        return 0;
    }
    pixels.to_u32().unwrap_or(u32::MAX)
}

impl Component for Screen {
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

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Screen:")?;
        writeln!(f, "\tDimensions:")?;
        writeln!(f, "\t\tHeight: {} mm; Width: {} mm", self.height_mm, self.width_mm)?;
        writeln!(f, "\tDisplay Details:")?;
        writeln!(f, "\t\tHeight in pixels: {};", self.height_pixels)?;
        writeln!(f, "\t\tWidth in pixels: {};", self.width_pixels)?;
        writeln!(f, "\t\tPixel Density (ppmm): {};", self.pixels_per_mm)?;
        writeln!(f, "\t\tRefresh Rate: {}", self.refresh_rate)?;
        writeln!(f, "\tCurrent Draw:")?;
        writeln!(
            f,
            "\t\tMax Current Draw: {} mA; Min Current Draw: {} mA",
            Maybe(&self.active_draw),
            Maybe(&self.passive_draw)
        )?;
        writeln!(f, "\tPrice: ${} USD", MaybeMoney(self.price))
    }
}
