use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

pub mod battery;
pub mod cellular_module;
pub mod circuit_board;
pub mod external_shell;
pub mod screen;
pub mod speakers;

pub use battery::Battery;
pub use cellular_module::CellularModule;
pub use circuit_board::CircuitBoard;
pub use external_shell::ExternalShell;
pub use screen::Screen;
pub use speakers::Speakers;

/// The six kinds of part a phone is made from, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::Display, strum::VariantArray)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PartKind {
    CircuitBoard,
    CellularModule,
    Battery,
    Speakers,
    Screen,
    ExternalShell,
}

impl PartKind {
    /// Parts whose current draw is summed when estimating battery life.
    pub fn is_power_consumer(&self) -> bool {
        !matches!(self, PartKind::Battery | PartKind::ExternalShell)
    }
}

/// Pricing and power capabilities of a part.
///
/// Not every part has a price or draws current, absent values are `None`.
pub trait Component {
    fn price(&self) -> Option<Decimal>;

    /// Current draw in mA while in use.
    fn active_draw(&self) -> Option<Decimal> {
        None
    }

    /// Current draw in mA while on standby.
    fn passive_draw(&self) -> Option<Decimal> {
        None
    }

    fn has_price(&self) -> bool {
        self.price().is_some()
    }

    fn has_active_draw(&self) -> bool {
        self.active_draw().is_some()
    }

    fn has_passive_draw(&self) -> bool {
        self.passive_draw().is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Part {
    CircuitBoard(CircuitBoard),
    CellularModule(CellularModule),
    Battery(Battery),
    Speakers(Speakers),
    Screen(Screen),
    ExternalShell(ExternalShell),
}

impl Part {
    pub fn kind(&self) -> PartKind {
        match self {
            Part::CircuitBoard(_) => PartKind::CircuitBoard,
            Part::CellularModule(_) => PartKind::CellularModule,
            Part::Battery(_) => PartKind::Battery,
            Part::Speakers(_) => PartKind::Speakers,
            Part::Screen(_) => PartKind::Screen,
            Part::ExternalShell(_) => PartKind::ExternalShell,
        }
    }

    pub fn as_component(&self) -> &dyn Component {
        match self {
            Part::CircuitBoard(part) => part,
            Part::CellularModule(part) => part,
            Part::Battery(part) => part,
            Part::Speakers(part) => part,
            Part::Screen(part) => part,
            Part::ExternalShell(part) => part,
        }
    }
}

impl Component for Part {
    fn price(&self) -> Option<Decimal> {
        self.as_component().price()
    }

    fn active_draw(&self) -> Option<Decimal> {
        self.as_component().active_draw()
    }

    fn passive_draw(&self) -> Option<Decimal> {
        self.as_component().passive_draw()
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::CircuitBoard(part) => Display::fmt(part, f),
            Part::CellularModule(part) => Display::fmt(part, f),
            Part::Battery(part) => Display::fmt(part, f),
            Part::Speakers(part) => Display::fmt(part, f),
            Part::Screen(part) => Display::fmt(part, f),
            Part::ExternalShell(part) => Display::fmt(part, f),
        }
    }
}

macro_rules! part_conversion {
    ($variant:ident) => {
        impl From<$variant> for Part {
            fn from(value: $variant) -> Self {
                Part::$variant(value)
            }
        }
    };
}

part_conversion!(CircuitBoard);
part_conversion!(CellularModule);
part_conversion!(Battery);
part_conversion!(Speakers);
part_conversion!(Screen);
part_conversion!(ExternalShell);

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use strum::VariantArray;

    use super::*;

    #[test]
    fn kind_matches_variant() {
        // given
        let part: Part = Battery::new("M-004", "NiCAD", dec!(8)).into();

        // expect
        assert_eq!(part.kind(), PartKind::Battery);
    }

    #[test]
    fn battery_and_shell_never_draw_power() {
        // given
        let consumers: Vec<PartKind> = PartKind::VARIANTS
            .iter()
            .copied()
            .filter(PartKind::is_power_consumer)
            .collect();

        // expect
        assert_eq!(consumers, vec![
            PartKind::CircuitBoard,
            PartKind::CellularModule,
            PartKind::Speakers,
            PartKind::Screen,
        ]);
    }

    #[test]
    fn capabilities_without_values() {
        // given
        let part: Part = CircuitBoard::new("MRL-0032", "1.3.7a").into();

        // expect
        assert!(!part.has_price());
        assert!(!part.has_active_draw());
        assert!(!part.has_passive_draw());
    }

    #[test]
    fn capabilities_with_values() {
        // given
        let part: Part = CircuitBoard::new("MRL-0032", "1.3.7a")
            .with_power_draw(dec!(0.127), dec!(0.018))
            .with_price(dec!(98.79))
            .into();

        // expect
        assert_eq!(part.price(), Some(dec!(98.79)));
        assert_eq!(part.active_draw(), Some(dec!(0.127)));
        assert_eq!(part.passive_draw(), Some(dec!(0.018)));
    }

    #[test]
    fn kind_display() {
        assert_eq!(PartKind::ExternalShell.to_string(), "external_shell");
    }
}
