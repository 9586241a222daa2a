use clap::ValueEnum;
use handset::presets::PresetRecipe;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RecipeArg {
    MeFone12,
    BirdSungT8,
}

impl From<RecipeArg> for PresetRecipe {
    fn from(value: RecipeArg) -> Self {
        match value {
            RecipeArg::MeFone12 => Self::MeFone12,
            RecipeArg::BirdSungT8 => Self::BirdSungT8,
        }
    }
}
