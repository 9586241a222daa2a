#[cfg(test)]
#[macro_use]
extern crate util;

pub mod recipes;
