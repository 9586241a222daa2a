use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Error};
use handset::recipe::RecipeDefinition;
use thiserror::Error;
use tracing::{info, trace, Level};
use util::source::Source;

pub type RecipeSource = Source;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecipeStoreError {
    #[error("Recipe has no manufacturer.")]
    MissingManufacturer,
    #[error("Recipe has no model.")]
    MissingModel,
}

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_recipe(recipe_source: &RecipeSource) -> Result<RecipeDefinition, Error> {
    info!("Loading recipe. source: '{}'", recipe_source);

    let recipe_path = recipe_source.path();
    let file = File::open(recipe_path)
        .with_context(|| format!("Error reading recipe. file: {}", recipe_path.display()))?;

    let recipe: RecipeDefinition = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Deserializing recipe. file: {}", recipe_path.display()))?;

    trace!("{:?}", recipe);

    validate(&recipe).with_context(|| format!("Validating recipe. file: {}", recipe_path.display()))?;

    Ok(recipe)
}

#[tracing::instrument(level = Level::DEBUG, skip(recipe))]
pub fn store_recipe(recipe_source: &RecipeSource, recipe: &RecipeDefinition) -> Result<(), Error> {
    info!(
        "Storing recipe. source: '{}', manufacturer: '{}', model: '{}'",
        recipe_source, recipe.manufacturer, recipe.model
    );

    let recipe_path = recipe_source.path();
    let file = File::create(recipe_path)
        .with_context(|| format!("Error creating recipe. file: {}", recipe_path.display()))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, recipe)
        .with_context(|| format!("Serializing recipe. file: {}", recipe_path.display()))?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

fn validate(recipe: &RecipeDefinition) -> Result<(), RecipeStoreError> {
    if recipe.manufacturer.trim().is_empty() {
        return Err(RecipeStoreError::MissingManufacturer);
    }
    if recipe.model.trim().is_empty() {
        return Err(RecipeStoreError::MissingModel);
    }
    Ok(())
}
