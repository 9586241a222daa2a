use anyhow::Context;
use clap::Parser;
use handset::assembler::assemble;
use handset::phone::Phone;
use handset::presets::PresetRecipe;
use handset::recipe::RecipeDefinition;
use stores::recipes::{load_recipe, store_recipe, RecipeSource};
use strum::VariantArray;
use tracing::info;

use crate::opts::{Command, Opts, RecipeSelection};

mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    match opts.command {
        Command::Recipes => {
            for preset in PresetRecipe::VARIANTS {
                println!("{}", preset);
            }
        }
        Command::Brochure(recipe_args) => {
            let phone = assemble_phone(recipe_args.try_into()?)?;
            let brochure = phone
                .brochure()
                .context("Building brochure")?;
            print!("{}", brochure);
        }
        Command::Report(recipe_args) => {
            let phone = assemble_phone(recipe_args.try_into()?)?;
            let report = phone
                .report()
                .context("Building report")?;
            print!("{}", report);
        }
        Command::ExportRecipe {
            recipe,
            output,
        } => {
            let preset = PresetRecipe::from(recipe);
            let definition = RecipeDefinition::from_recipe(preset.recipe().as_ref());

            store_recipe(&RecipeSource::File(output), &definition)?;

            info!("Exported recipe. recipe: {}", preset);
        }
    }

    Ok(())
}

fn assemble_phone(selection: RecipeSelection) -> anyhow::Result<Phone> {
    let phone = match selection {
        RecipeSelection::Preset(preset) => {
            info!("Using preset recipe. recipe: {}", preset);
            assemble(preset.recipe().as_ref())
        }
        RecipeSelection::File(recipe_source) => {
            let recipe = load_recipe(&recipe_source)?;
            assemble(&recipe)
        }
    };

    Ok(phone)
}
