//! Phones assembled from parts.
//!
//! A [`Recipe`](recipe::Recipe) knows the exact parts of one phone configuration, the
//! [`assembler`] turns it into a [`Phone`](phone::Phone), whose prices, battery life, brochure and report are
//! derived from whatever parts it holds.

pub mod assembler;
pub mod battery_life;
pub mod display;
pub mod part;
pub mod phone;
pub mod presets;
pub mod recipe;
pub mod report;
