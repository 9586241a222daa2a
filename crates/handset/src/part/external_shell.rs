use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::display::{Flag, Maybe, MaybeMoney};
use crate::part::Component;

/// The case of a phone, its dimensions are the external dimensions of the phone.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ExternalShell {
    pub material: String,
    /// in mm
    pub height: Decimal,
    /// in mm
    pub width: Decimal,
    /// in mm
    pub depth: Decimal,
    /// e.g. '3 ft.'
    pub drop_resistance_rating: Option<String>,
    /// Cost per unit of assembling the phone into this shell
    pub assembly_cost: Option<Decimal>,
    #[serde(default)]
    pub is_water_proof: bool,
    #[serde(default)]
    pub is_dust_sand_proof: bool,
    pub price: Option<Decimal>,
}

impl ExternalShell {
    pub fn new(material: impl Into<String>, height: Decimal, width: Decimal, depth: Decimal) -> Self {
        Self {
            material: material.into(),
            height,
            width,
            depth,
            drop_resistance_rating: None,
            assembly_cost: None,
            is_water_proof: false,
            is_dust_sand_proof: false,
            price: None,
        }
    }

    pub fn with_drop_resistance_rating(mut self, drop_resistance_rating: impl Into<String>) -> Self {
        self.drop_resistance_rating = Some(drop_resistance_rating.into());
        self
    }

    pub fn with_assembly_cost(mut self, assembly_cost: Decimal) -> Self {
        self.assembly_cost = Some(assembly_cost);
        self
    }

    pub fn with_water_proofing(mut self, is_water_proof: bool) -> Self {
        self.is_water_proof = is_water_proof;
        self
    }

    pub fn with_dust_sand_proofing(mut self, is_dust_sand_proof: bool) -> Self {
        self.is_dust_sand_proof = is_dust_sand_proof;
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

impl Component for ExternalShell {
    fn price(&self) -> Option<Decimal> {
        self.price
    }
}

impl Display for ExternalShell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "External Shell:")?;
        writeln!(f, "\tConstruction Material: {};", self.material)?;
        writeln!(f, "\tDimensions:")?;
        writeln!(
            f,
            "\t\tHeight: {} mm; Width: {} mm; Depth: {} mm;",
            self.height, self.width, self.depth
        )?;
        writeln!(f, "\tDrop Resistance: {};", Maybe(&self.drop_resistance_rating))?;
        writeln!(f, "\tWater Proof: {};", Flag(self.is_water_proof))?;
        writeln!(f, "\tDust and Sand Proof: {};", Flag(self.is_dust_sand_proof))?;
        writeln!(f, "\tPrice: ${} USD;", MaybeMoney(self.price))?;
        writeln!(f, "\tAssembly Cost: ${};", MaybeMoney(self.assembly_cost))
    }
}
