//! The phones this crate knows how to build out of the box.

use rust_decimal_macros::dec;

use crate::part::{Battery, CellularModule, CircuitBoard, ExternalShell, Screen, Speakers};
use crate::recipe::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::Display, strum::EnumString, strum::VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum PresetRecipe {
    MeFone12,
    BirdSungT8,
}

impl PresetRecipe {
    pub fn recipe(&self) -> Box<dyn Recipe> {
        match self {
            PresetRecipe::MeFone12 => Box::new(MeFone12),
            PresetRecipe::BirdSungT8 => Box::new(BirdSungT8),
        }
    }
}

/// The NBD MeFone 12.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeFone12;

impl Recipe for MeFone12 {
    fn manufacturer(&self) -> &str {
        "NBD"
    }

    fn model(&self) -> &str {
        "MeFone12"
    }

    fn build_circuit_board(&self) -> Option<CircuitBoard> {
        Some(
            CircuitBoard::new("MRL-0032", "1.3.7a")
                .with_power_draw(dec!(0.127), dec!(0.018))
                .with_price(dec!(98.79)),
        )
    }

    fn build_cellular_module(&self) -> Option<CellularModule> {
        Some(
            CellularModule::new("Kellog", "ARNIL-3")
                .with_bands(["3G", "4G", "LTE"])
                .with_power_draw(dec!(0.118), dec!(0.006))
                .with_price(dec!(75.33)),
        )
    }

    fn build_battery(&self) -> Option<Battery> {
        Some(
            Battery::new("M-004", "NiCAD", dec!(8))
                .with_charge_cycles(250)
                .with_price(dec!(5.38)),
        )
    }

    fn build_speakers(&self) -> Option<Speakers> {
        Some(
            Speakers::new("Lanteek", "35 - 21 kHz", dec!(4))
                .with_power_draw(dec!(0.2), dec!(0))
                .with_price(dec!(5.00)),
        )
    }

    fn build_screen(&self) -> Option<Screen> {
        Some(
            Screen::new(dec!(158.4), dec!(78.1), dec!(17.78), 60)
                .with_power_draw(dec!(0.68), dec!(0.3))
                .with_price(dec!(65.88)),
        )
    }

    fn build_external_shell(&self) -> Option<ExternalShell> {
        Some(
            ExternalShell::new("Aluminum", dec!(158.9), dec!(85.1), dec!(0.4))
                .with_drop_resistance_rating("3 ft.")
                .with_assembly_cost(dec!(12.10))
                .with_water_proofing(false)
                .with_dust_sand_proofing(false)
                .with_price(dec!(6.12)),
        )
    }
}

/// The Birdsung T8.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirdSungT8;

impl Recipe for BirdSungT8 {
    fn manufacturer(&self) -> &str {
        "Birdsung"
    }

    fn model(&self) -> &str {
        "T8"
    }

    fn build_circuit_board(&self) -> Option<CircuitBoard> {
        Some(
            CircuitBoard::new("Cobalt", "2.0.4")
                .with_power_draw(dec!(0.117), dec!(0.021))
                .with_price(dec!(78.21)),
        )
    }

    fn build_cellular_module(&self) -> Option<CellularModule> {
        Some(
            CellularModule::new("LuckySnaps", "VINA99")
                .with_bands(["3G", "4G", "CDMA", "FDMA", "EVDO3"])
                .with_power_draw(dec!(0.21), dec!(0.008))
                .with_price(dec!(72.63)),
        )
    }

    fn build_battery(&self) -> Option<Battery> {
        Some(
            Battery::new("DNN0", "Lion", dec!(7.8))
                .with_charge_cycles(500)
                .with_price(dec!(10.12)),
        )
    }

    fn build_speakers(&self) -> Option<Speakers> {
        Some(
            Speakers::new("SpiffySoundTek", "28 - 22kHz", dec!(4))
                .with_power_draw(dec!(0.2), dec!(0))
                .with_price(dec!(5.00)),
        )
    }

    fn build_screen(&self) -> Option<Screen> {
        Some(
            Screen::new(dec!(154.0), dec!(72.4), dec!(14), 60)
                .with_power_draw(dec!(0.71), dec!(0.1))
                .with_price(dec!(55.69)),
        )
    }

    fn build_external_shell(&self) -> Option<ExternalShell> {
        Some(
            ExternalShell::new("ABS", dec!(160), dec!(78), dec!(0.38))
                .with_drop_resistance_rating("1.2 ft.")
                .with_assembly_cost(dec!(8.10))
                .with_water_proofing(false)
                .with_dust_sand_proofing(true)
                .with_price(dec!(1.20)),
        )
    }
}
