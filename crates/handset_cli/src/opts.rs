#![deny(missing_docs)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::RecipeArg;
use handset::presets::PresetRecipe;
use stores::recipes::RecipeSource;
use thiserror::Error;
use util::source::SourceError;

#[derive(Parser, Debug)]
#[command(name = "handset_cli")]
#[command(bin_name = "handset_cli")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the preset recipes
    Recipes,

    /// Print the brochure of a phone
    Brochure(RecipeArgs),

    /// Print a report of every part of a phone, with pricing
    Report(RecipeArgs),

    /// Write a preset recipe to a file, for use with '--recipe-file'
    ExportRecipe {
        /// Preset recipe
        #[arg(long, value_name = "PRESET")]
        recipe: RecipeArg,

        /// Recipe file to write
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct RecipeArgs {
    /// Preset recipe
    #[arg(long, value_name = "PRESET")]
    pub(crate) recipe: Option<RecipeArg>,

    /// Recipe file (JSON)
    #[arg(long, value_name = "FILE")]
    pub(crate) recipe_file: Option<PathBuf>,
}

/// The recipe a phone is assembled from.
#[derive(Debug, PartialEq)]
pub(crate) enum RecipeSelection {
    /// One of the built-in recipes
    Preset(PresetRecipe),
    /// A recipe stored in a file
    File(RecipeSource),
}

#[derive(Error, Debug, PartialEq)]
pub(crate) enum RecipeArgsError {
    /// Neither a preset nor a file was given
    #[error("Either a recipe or a recipe file is required")]
    MissingRecipe,
    /// The recipe file is unusable
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl TryFrom<RecipeArgs> for RecipeSelection {
    type Error = RecipeArgsError;

    fn try_from(args: RecipeArgs) -> Result<Self, Self::Error> {
        match (args.recipe, args.recipe_file) {
            (Some(recipe), _) => Ok(RecipeSelection::Preset(recipe.into())),
            (None, Some(recipe_file)) => Ok(RecipeSelection::File(RecipeSource::try_from_existing_file(
                recipe_file,
            )?)),
            (None, None) => Err(RecipeArgsError::MissingRecipe),
        }
    }
}
