use tracing::{debug, info};

use crate::phone::Phone;
use crate::recipe::Recipe;

/// Builds a phone from everything the recipe provides.
///
/// Parts the recipe does not provide are left unset.
pub fn assemble<R: Recipe + ?Sized>(recipe: &R) -> Phone {
    let mut phone = Phone::new();
    phone.set_manufacturer(recipe.manufacturer());
    phone.set_model(recipe.model());

    if let Some(circuit_board) = recipe.build_circuit_board() {
        phone.set_part(circuit_board);
    }
    if let Some(cellular_module) = recipe.build_cellular_module() {
        phone.set_part(cellular_module);
    }
    if let Some(battery) = recipe.build_battery() {
        phone.set_part(battery);
    }
    if let Some(speakers) = recipe.build_speakers() {
        phone.set_part(speakers);
    }
    if let Some(screen) = recipe.build_screen() {
        phone.set_part(screen);
    }
    if let Some(external_shell) = recipe.build_external_shell() {
        phone.set_part(external_shell);
    }

    let missing_parts = phone.missing_parts();
    if !missing_parts.is_empty() {
        debug!("Recipe did not provide all parts. missing: {:?}", missing_parts);
    }

    info!(
        "Assembled phone. manufacturer: '{}', model: '{}'",
        recipe.manufacturer(),
        recipe.model()
    );

    phone
}
