use crate::part::{Battery, CellularModule, CircuitBoard, ExternalShell, Screen, Speakers};

/// Knows the exact parts and identity of one phone configuration.
///
/// A recipe that cannot provide a part returns `None`, the assembled phone will then be missing that part.
pub trait Recipe {
    fn manufacturer(&self) -> &str;
    fn model(&self) -> &str;

    fn build_circuit_board(&self) -> Option<CircuitBoard>;
    fn build_cellular_module(&self) -> Option<CellularModule>;
    fn build_battery(&self) -> Option<Battery>;
    fn build_speakers(&self) -> Option<Speakers>;
    fn build_screen(&self) -> Option<Screen>;
    fn build_external_shell(&self) -> Option<ExternalShell>;
}

/// A recipe as plain data, e.g. loaded from a file.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RecipeDefinition {
    pub manufacturer: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_board: Option<CircuitBoard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular_module: Option<CellularModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<Battery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Speakers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<Screen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_shell: Option<ExternalShell>,
}

impl RecipeDefinition {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            circuit_board: None,
            cellular_module: None,
            battery: None,
            speakers: None,
            screen: None,
            external_shell: None,
        }
    }

    /// Captures everything another recipe builds.
    pub fn from_recipe<R: Recipe + ?Sized>(recipe: &R) -> Self {
        Self {
            manufacturer: recipe.manufacturer().to_string(),
            model: recipe.model().to_string(),
            circuit_board: recipe.build_circuit_board(),
            cellular_module: recipe.build_cellular_module(),
            battery: recipe.build_battery(),
            speakers: recipe.build_speakers(),
            screen: recipe.build_screen(),
            external_shell: recipe.build_external_shell(),
        }
    }

    pub fn with_circuit_board(mut self, circuit_board: CircuitBoard) -> Self {
        self.circuit_board = Some(circuit_board);
        self
    }

    pub fn with_cellular_module(mut self, cellular_module: CellularModule) -> Self {
        self.cellular_module = Some(cellular_module);
        self
    }

    pub fn with_battery(mut self, battery: Battery) -> Self {
        self.battery = Some(battery);
        self
    }

    pub fn with_speakers(mut self, speakers: Speakers) -> Self {
        self.speakers = Some(speakers);
        self
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn with_external_shell(mut self, external_shell: ExternalShell) -> Self {
        self.external_shell = Some(external_shell);
        self
    }
}

impl Recipe for RecipeDefinition {
    fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn build_circuit_board(&self) -> Option<CircuitBoard> {
        self.circuit_board.clone()
    }

    fn build_cellular_module(&self) -> Option<CellularModule> {
        self.cellular_module.clone()
    }

    fn build_battery(&self) -> Option<Battery> {
        self.battery.clone()
    }

    fn build_speakers(&self) -> Option<Speakers> {
        self.speakers.clone()
    }

    fn build_screen(&self) -> Option<Screen> {
        self.screen.clone()
    }

    fn build_external_shell(&self) -> Option<ExternalShell> {
        self.external_shell.clone()
    }
}
